pub mod analytics;
pub mod blocks;
pub mod carousel;
pub mod icon;
pub mod layout;

pub use analytics::{Analytics, AnalyticsProps};
pub use icon::Icon;
pub use layout::{localized_href, LocaleOption, SiteFooter, SiteHeader};
