use battlegeek::{format_record, level_from};
use log::{Level, LevelFilter, Record};

#[test]
fn test_level_from_env_value() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Info);
}

#[test]
fn test_record_drops_crate_prefix() {
    assert_eq!(
        format_record(
            &Record::builder()
                .args(format_args!("shot {} missed", 7))
                .level(Level::Debug)
                .target("battlegeek::board")
                .build()
        ),
        "DEBUG board: shot 7 missed"
    );
    assert_eq!(
        format_record(
            &Record::builder()
                .args(format_args!("started"))
                .level(Level::Info)
                .target("sim")
                .build()
        ),
        "INFO  sim: started"
    );
}
