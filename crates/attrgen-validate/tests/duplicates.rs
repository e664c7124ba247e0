//! Duplicate diagnostics must reach the log output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use attrgen_model::{ApiEntry, AttributeSet, ProjectAttribute};
use attrgen_validate::check_duplicates;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn attribute_set(entries: &[(u32, &str)]) -> AttributeSet {
    let mut set = AttributeSet::new("MG100");
    for (id, name) in entries {
        set.attributes
            .push(ProjectAttribute::new(*id, *name, "uint16_t", "0"));
        set.api.push(ApiEntry {
            id: *id,
            name: (*name).to_string(),
        });
    }
    set
}

#[test]
fn duplicate_id_logs_both_names() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let set = attribute_set(&[(3, "batteryLow"), (9, "txPower"), (3, "batteryAlarm")]);
    let clean = tracing::subscriber::with_default(subscriber, || check_duplicates(&set));

    assert!(!clean);
    let log = captured.text();
    assert!(log.contains("Duplicate attribute ID in Project"), "{log}");
    assert!(log.contains("batteryLow"), "{log}");
    assert!(log.contains("batteryAlarm"), "{log}");
    assert!(!log.contains("txPower"), "{log}");
}
