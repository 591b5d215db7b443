use serde::{Deserialize, Serialize};

/// Вкладки страницы каталога (группировка по регионам)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionTab {
    #[default]
    All,
    SoutheastAsia,
    MiddleEast,
    India,
    Europe,
}

impl RegionTab {
    /// Получить код вкладки
    pub fn code(&self) -> &'static str {
        match self {
            RegionTab::All => "all",
            RegionTab::SoutheastAsia => "southeast-asia",
            RegionTab::MiddleEast => "middle-east",
            RegionTab::India => "india",
            RegionTab::Europe => "europe",
        }
    }

    /// Значение поля `region` в каталоге; `None` для вкладки "все"
    pub fn region_name(&self) -> Option<&'static str> {
        match self {
            RegionTab::All => None,
            RegionTab::SoutheastAsia => Some("Southeast Asia"),
            RegionTab::MiddleEast => Some("Middle East"),
            RegionTab::India => Some("India"),
            RegionTab::Europe => Some("Europe"),
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        self.region_name().unwrap_or("All Packages")
    }

    pub fn all() -> Vec<RegionTab> {
        vec![
            RegionTab::All,
            RegionTab::SoutheastAsia,
            RegionTab::MiddleEast,
            RegionTab::India,
            RegionTab::Europe,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(RegionTab::All),
            "southeast-asia" => Some(RegionTab::SoutheastAsia),
            "middle-east" => Some(RegionTab::MiddleEast),
            "india" => Some(RegionTab::India),
            "europe" => Some(RegionTab::Europe),
            _ => None,
        }
    }

    /// Разбор параметра из ссылки: код вкладки или название региона
    /// в любом регистре; нераспознанное значение даёт вкладку "все"
    pub fn from_query(value: &str) -> Self {
        let value = value.trim();
        Self::from_code(value)
            .or_else(|| {
                Self::all().into_iter().find(|tab| {
                    tab.region_name()
                        .is_some_and(|name| name.eq_ignore_ascii_case(value))
                })
            })
            .unwrap_or_default()
    }

    /// Проверка принадлежности региона вкладке
    pub fn includes(&self, region: &str) -> bool {
        match self.region_name() {
            None => true,
            Some(name) => name == region,
        }
    }
}
