use std::collections::VecDeque;

use crate::{Settings, SettingsRepository, SettingsService, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, String> {
        self.repository.read_settings().await
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.repository.write_settings(settings).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Theme,
        log::{Service as _, push_entry},
    };

    #[derive(Default)]
    struct FakeRepository {
        settings: Mutex<Option<Settings>>,
        entries: Mutex<VecDeque<log::Entry>>,
    }

    impl SettingsRepository for FakeRepository {
        async fn read_settings(&self) -> Result<Settings, String> {
            self.settings
                .lock()
                .map(|s| s.unwrap_or_default())
                .map_err(|err| err.to_string())
        }

        async fn write_settings(&self, settings: Settings) -> Result<(), String> {
            *self.settings.lock().map_err(|err| err.to_string())? = Some(settings);
            Ok(())
        }
    }

    impl log::Repository for FakeRepository {
        fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
            Ok(self.entries.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
            push_entry(&mut self.entries.lock().unwrap(), entry);
            Ok(())
        }
    }

    #[test]
    fn test_settings() {
        let service = Service::new(FakeRepository::default());
        assert_eq!(block_on(service.get_settings()), Ok(Settings::default()));

        let settings = Settings {
            theme: Theme::Dark,
            show_weight: false,
        };
        block_on(service.set_settings(settings)).unwrap();
        assert_eq!(block_on(service.get_settings()), Ok(settings));
    }

    #[test]
    fn test_log_entries() {
        let service = Service::new(FakeRepository::default());
        let entry = log::Entry {
            time: "Jan 01 10:00:00".to_string(),
            level: ::log::Level::Error,
            message: "failed to create template".to_string(),
        };
        service.add_log_entry(entry.clone()).unwrap();
        assert_eq!(
            service.get_log_entries().unwrap(),
            VecDeque::from([entry])
        );
    }
}
