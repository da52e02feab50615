// Navigation shell - route table and side navigation
use serde::Serialize;

pub const APP_TITLE: &str = "Cell Tower Monitoring";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Overview,
    PowerSupply,
    Battery,
    Generator,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Self::Overview,
        Self::PowerSupply,
        Self::Battery,
        Self::Generator,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::PowerSupply => "/power-supply",
            Self::Battery => "/battery",
            Self::Generator => "/generator",
        }
    }

    pub fn nav_name(self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::PowerSupply => "Power Supply",
            Self::Battery => "Battery",
            Self::Generator => "Generator",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Overview => "layout-dashboard",
            Self::PowerSupply => "zap",
            Self::Battery => "battery",
            Self::Generator => "wind",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navigation {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

impl Navigation {
    pub fn sidebar() -> Self {
        let items = Route::ALL
            .into_iter()
            .map(|route| NavItem {
                path: route.path(),
                name: route.nav_name(),
                icon: route.icon(),
            })
            .collect();

        Self {
            title: APP_TITLE,
            items,
        }
    }
}
