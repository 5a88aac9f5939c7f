use std::collections::VecDeque;

use fitrack_web_app::log;
use gloo_storage::Storage as GlooStorage;

const KEY_LOG: &str = "log";

#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::CAPACITY);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn clear_entries(&self) -> Result<(), log::Error> {
        gloo_storage::LocalStorage::delete(KEY_LOG);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use fitrack_web_app::log::{self, Repository};
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::super::LocalStorage;

        fn entry(message: &str) -> log::Entry {
            log::Entry {
                time: "May 01 08:30:00".to_string(),
                level: ::log::Level::Info,
                message: message.to_string(),
            }
        }

        #[wasm_bindgen_test]
        fn test_write_entry() {
            LocalStorage.clear_entries().unwrap();

            assert!(LocalStorage.read_entries().unwrap().is_empty());

            LocalStorage.write_entry(entry("first")).unwrap();
            LocalStorage.write_entry(entry("second")).unwrap();

            assert_eq!(
                LocalStorage
                    .read_entries()
                    .unwrap()
                    .iter()
                    .map(|e| e.message.clone())
                    .collect::<Vec<_>>(),
                vec!["second", "first"]
            );
        }

        #[wasm_bindgen_test]
        fn test_write_entry_capacity() {
            LocalStorage.clear_entries().unwrap();

            for i in 0..=log::CAPACITY {
                LocalStorage.write_entry(entry(&i.to_string())).unwrap();
            }

            let entries = LocalStorage.read_entries().unwrap();
            assert_eq!(entries.len(), log::CAPACITY);
            assert_eq!(entries[0].message, log::CAPACITY.to_string());
        }
    }
}
