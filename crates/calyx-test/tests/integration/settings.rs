//! Configuration feeding the codec, and sharing entities across threads.

use std::sync::Arc;
use std::thread;

use ::config::{File, FileFormat};
use calyx_test::config::Settings;
use calyx_test::constants::PRODUCT_ID;
use calyx_test::xcal::{self, Event, ReaderOptions, Todo, WriterOptions};

use super::helpers::london_event;

#[test_log::test]
fn settings_drive_codec_options() -> anyhow::Result<()> {
    let toml = r#"
[codec]
product_id = "-//Example Corp//Planner 3//EN"
strict = true
"#;
    let settings = Settings::from_builder(
        Settings::builder()?.add_source(File::from_str(toml, FileFormat::Toml)),
    )?;

    let writer = WriterOptions::try_from(&settings.codec)?;
    let reader = ReaderOptions::from(&settings.codec);
    assert!(reader.strict);

    let document = xcal::write_event_with(&london_event(), &writer);
    assert!(document.contains("<prodid><text>-//Example Corp//Planner 3//EN</text></prodid>"));
    let parsed = xcal::read_event_with(&document, reader)?;
    assert_eq!(parsed, london_event());
    Ok(())
}

#[test_log::test]
fn default_settings_match_default_options() -> anyhow::Result<()> {
    let settings = Settings::from_builder(Settings::builder()?)?;

    assert_eq!(WriterOptions::try_from(&settings.codec)?, WriterOptions::default());
    assert_eq!(ReaderOptions::from(&settings.codec), ReaderOptions::default());
    assert_eq!(WriterOptions::default().product_id, PRODUCT_ID);
    Ok(())
}

#[test]
fn entities_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Event>();
    assert_send_sync::<Todo>();
    assert_send_sync::<WriterOptions>();
    assert_send_sync::<ReaderOptions>();
}

#[test_log::test]
fn concurrent_codec_calls() {
    let event = Arc::new(london_event());
    let expected = xcal::write_event(&event);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let event = Arc::clone(&event);
            thread::spawn(move || {
                let document = xcal::write_event(&event);
                let parsed = xcal::read_event(&document, true).unwrap();
                xcal::write_event(&parsed)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
