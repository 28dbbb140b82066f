//! Change notifications.
//!
//! A [`Notifier`] is told about every successful mutation by the service.
//! Delivery is best-effort: the service logs a failed `send` and carries on,
//! the store change it reports on stays committed.
//!
//! The two bundled notifiers only simulate delivery by writing a line to a
//! sink (stdout unless told otherwise). A real SMTP or SMS gateway client
//! only needs to implement the trait.

use crate::config::NotifierConfig;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Notification rejected: {0}")]
    Rejected(String),
}

pub trait Notifier {
    /// Short label used in logs.
    fn name(&self) -> &str;

    fn send(&mut self, message: &str) -> Result<(), NotifyError>;
}

pub struct EmailNotifier {
    from: String,
    to: String,
    sink: Box<dyn Write>,
}

impl EmailNotifier {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::with_sink(from, to, Box::new(io::stdout()))
    }

    pub fn with_sink(from: impl Into<String>, to: impl Into<String>, sink: Box<dyn Write>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            sink,
        }
    }

    pub fn render(&self, message: &str) -> String {
        format!(
            "[EMAIL] From: {} | To: {} | Message: {}",
            self.from, self.to, message
        )
    }
}

impl Notifier for EmailNotifier {
    fn name(&self) -> &str {
        "email"
    }

    fn send(&mut self, message: &str) -> Result<(), NotifyError> {
        let line = self.render(message);
        writeln!(self.sink, "{}", line)?;
        self.sink.flush()?;
        Ok(())
    }
}

pub struct SmsNotifier {
    phone: String,
    sink: Box<dyn Write>,
}

impl SmsNotifier {
    pub fn new(phone: impl Into<String>) -> Self {
        Self::with_sink(phone, Box::new(io::stdout()))
    }

    pub fn with_sink(phone: impl Into<String>, sink: Box<dyn Write>) -> Self {
        Self {
            phone: phone.into(),
            sink,
        }
    }

    pub fn render(&self, message: &str) -> String {
        format!("[SMS] To: {} | Message: {}", self.phone, message)
    }
}

impl Notifier for SmsNotifier {
    fn name(&self) -> &str {
        "sms"
    }

    fn send(&mut self, message: &str) -> Result<(), NotifyError> {
        if self.phone.trim().is_empty() {
            return Err(NotifyError::Rejected("no phone number configured".to_string()));
        }
        let line = self.render(message);
        writeln!(self.sink, "{}", line)?;
        self.sink.flush()?;
        Ok(())
    }
}

/// Build the console notifiers enabled in `config`.
pub fn from_config(config: &NotifierConfig) -> Vec<Box<dyn Notifier>> {
    let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();
    if let Some(email) = &config.email {
        notifiers.push(Box::new(EmailNotifier::new(&email.from, &email.to)));
    }
    if let Some(sms) = &config.sms {
        notifiers.push(Box::new(SmsNotifier::new(&sms.phone)));
    }
    notifiers
}

#[cfg(any(test, feature = "test_utils"))]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every message it is sent. Clones share the same log.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        pub sent: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> Vec<String> {
            self.sent.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn name(&self) -> &str {
            "recording"
        }

        fn send(&mut self, message: &str) -> Result<(), NotifyError> {
            self.sent.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    /// Always fails.
    pub struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn name(&self) -> &str {
            "failing"
        }

        fn send(&mut self, _message: &str) -> Result<(), NotifyError> {
            Err(NotifyError::Rejected("simulated failure".to_string()))
        }
    }

    /// A `Write` sink that can be inspected after being boxed.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(pub Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
