//! Console Event Sink
//!
//! Human-readable progress lines on stderr, one per pipeline step.

use std::io::{self, Write};
use std::sync::Mutex;

use is_terminal::IsTerminal;

use crate::domain::ports::{PipelineEvent, PipelineEventSink};

/// Icons for progress rendering
struct Icons {
    check: &'static str,
    arrow: &'static str,
    same: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            arrow: "→",
            same: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            arrow: "->",
            same: "[=]",
        }
    }
}

pub struct ConsoleEventSink {
    icons: Icons,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Sink on stderr; Unicode icons only when stderr is a terminal.
    pub fn stderr() -> Self {
        let unicode = io::stderr().is_terminal();
        Self::with_writer(io::stderr(), unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, unicode: bool) -> Self {
        Self {
            icons: if unicode {
                Icons::unicode()
            } else {
                Icons::ascii()
            },
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let i = &self.icons;
        let text = match event {
            PipelineEvent::Started {
                working_dir,
                version,
            } => format!("Deploying {} (version {})", working_dir.display(), version),
            PipelineEvent::Bundled { output_dir } => {
                format!("{} Bundled {}", i.check, output_dir.display())
            }
            PipelineEvent::Packaged {
                file_name, hash, ..
            } => format!("{} Packaged {} ({})", i.check, file_name, hash),
            PipelineEvent::Keyed { object_key } => format!("{} Key {}", i.arrow, object_key),
            PipelineEvent::ManifestWritten { path } => {
                format!("{} Manifest {}", i.check, path.display())
            }
            PipelineEvent::Published { location, uploaded } => {
                if uploaded {
                    format!("{} Published {}", i.check, location)
                } else {
                    format!("{} Already published {}", i.same, location)
                }
            }
            PipelineEvent::Completed {
                object_key,
                unchanged,
                dry_run,
                ..
            } => {
                if dry_run {
                    format!("Dry run: would deploy {}", object_key)
                } else if unchanged {
                    format!("{} Up to date: {}", i.same, object_key)
                } else {
                    format!("{} Ready: {}", i.check, object_key)
                }
            }
        };
        self.line(text);
    }
}
