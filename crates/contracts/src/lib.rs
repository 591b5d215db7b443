//! Общие контракты каталога туров: модель пакета, движок поиска,
//! пагинация и последовательность запросов.
//!
//! Крейт не зависит от рантайма и может использоваться как backend,
//! так и любым клиентом.

pub mod domain;
pub mod enums;
pub mod shared;
