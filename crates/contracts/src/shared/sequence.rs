//! Порядок применения результатов запросов ("последний выигрывает").
//!
//! Каждый запрос получает номер из `QuerySequencer`. Результат попадает в
//! `LatestResult` только если его номер больше всех уже применённых, поэтому
//! поздний ответ на старый запрос не перезапишет более свежий.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Выдаёт строго возрастающие номера запросов
#[derive(Debug, Default)]
pub struct QuerySequencer {
    last_issued: AtomicU64,
}

impl QuerySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Следующий номер; первый выданный равен 1
    pub fn issue(&self) -> u64 {
        self.last_issued.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Хранит последний применённый результат
#[derive(Debug)]
pub struct LatestResult<T> {
    slot: Mutex<Option<(u64, T)>>,
}

impl<T> Default for LatestResult<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T> LatestResult<T> {
    pub fn new() -> Self {
        Self::default()
    }

    // Отравленный mutex не делает значение некорректным: запись атомарна
    fn lock(&self) -> MutexGuard<'_, Option<(u64, T)>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Применить результат запроса `seq`.
    /// Возвращает `false`, если уже применён результат более нового запроса.
    pub fn offer(&self, seq: u64, value: T) -> bool {
        let mut slot = self.lock();
        match slot.as_ref() {
            Some((applied, _)) if *applied >= seq => false,
            _ => {
                *slot = Some((seq, value));
                true
            }
        }
    }

    /// Номер последнего применённого запроса
    pub fn applied_seq(&self) -> Option<u64> {
        self.lock().as_ref().map(|(seq, _)| *seq)
    }
}

impl<T: Clone> LatestResult<T> {
    pub fn latest(&self) -> Option<T> {
        self.lock().as_ref().map(|(_, value)| value.clone())
    }
}
