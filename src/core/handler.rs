use crate::core::{Blacklist, Person, PersonQuery};
use crate::utils::error::{LookupError, Result};

pub const HOME_PLACE: &str = "North Pole";

const FIXED_BANNED_NAME: &str = "Easter Bunny";
const FIXED_AGE: i32 = i32::MAX - 20000;
const BLACKLIST_AGE: i32 = i32::MAX;

/// Answers every lookup with a fixed record, except for one hardcoded name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedQueryHandler;

impl FixedQueryHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn find_details(&self, name: &str) -> Result<Person> {
        tracing::debug!(name, "fixed lookup");

        if name.to_lowercase() == FIXED_BANNED_NAME.to_lowercase() {
            tracing::warn!(name, "rejected hardcoded name");
            return Err(LookupError::unknown_person(FIXED_BANNED_NAME));
        }

        Ok(Person::new(name, HOME_PLACE, FIXED_AGE))
    }
}

impl PersonQuery for FixedQueryHandler {
    fn execute_query(&self, name: &str) -> Result<Person> {
        self.find_details(name)
    }
}

/// Answers lookups unless the name is on its [`Blacklist`].
#[derive(Debug, Clone, Default)]
pub struct BlacklistQueryHandler {
    blacklist: Blacklist,
}

impl BlacklistQueryHandler {
    pub fn new(blacklist: Blacklist) -> Self {
        Self { blacklist }
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    pub fn blacklist_mut(&mut self) -> &mut Blacklist {
        &mut self.blacklist
    }
}

impl PersonQuery for BlacklistQueryHandler {
    fn execute_query(&self, name: &str) -> Result<Person> {
        tracing::debug!(name, banned = self.blacklist.len(), "blacklist lookup");

        if self.blacklist.contains(name) {
            tracing::warn!(name, "rejected blacklisted name");
            return Err(LookupError::unknown_person(name));
        }

        Ok(Person::new(name, HOME_PLACE, BLACKLIST_AGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_fixed_handler_returns_fixed_record() {
        let person = FixedQueryHandler::new().find_details("Santa").unwrap();
        assert_eq!(person, Person::new("Santa", "North Pole", i32::MAX - 20000));
    }

    #[test]
    fn test_fixed_handler_rejects_banned_name_in_any_case() {
        let handler = FixedQueryHandler::new();
        for name in ["Easter Bunny", "easter bunny", "EASTER BUNNY"] {
            let err = handler.find_details(name).unwrap_err();
            assert_eq!(err.to_string(), "Who is the Easter Bunny?!!11!");
        }
    }

    #[test]
    fn test_blacklist_handler_uses_given_name_in_message() {
        let handler = BlacklistQueryHandler::new(["Krampus"].into_iter().collect());
        let err = handler.execute_query("kRaMpUs").unwrap_err();
        assert_eq!(err.to_string(), "Who is the kRaMpUs?!!11!");
        assert!(matches!(err, LookupError::UnknownPerson { .. }));
    }

    #[test]
    fn test_blacklist_can_change_after_construction() {
        let mut handler = BlacklistQueryHandler::default();
        assert!(handler.execute_query("Krampus").is_ok());

        handler.blacklist_mut().push("Krampus");
        assert!(handler.execute_query("Krampus").is_err());

        handler.blacklist_mut().remove("krampus");
        let person = handler.execute_query("Krampus").unwrap();
        assert_eq!(person.age(), i32::MAX);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.text()
    }

    #[test]
    fn test_lookups_log_debug_and_rejections_log_warn() {
        let handler = BlacklistQueryHandler::new(["Krampus"].into_iter().collect());

        let logs = with_captured_logs(|| {
            let _ = handler.execute_query("Santa");
        });
        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("blacklist lookup"));
        assert!(!logs.contains("WARN"));

        let logs = with_captured_logs(|| {
            let _ = handler.execute_query("krampus");
        });
        assert!(logs.contains("blacklist lookup"));
        assert!(logs.contains("WARN"));
        assert!(logs.contains("rejected blacklisted name"));

        let logs = with_captured_logs(|| {
            let _ = FixedQueryHandler::new().find_details("Easter Bunny");
        });
        assert!(logs.contains("fixed lookup"));
        assert!(logs.contains("rejected hardcoded name"));
    }

    #[test]
    fn test_empty_name_is_looked_up_like_any_other() {
        let person = BlacklistQueryHandler::default().execute_query("").unwrap();
        assert_eq!(person.name(), "");
        assert_eq!(person.place(), HOME_PLACE);
    }
}
