pub mod feature;
pub mod feature2;
pub mod hero;
pub mod showcase;

use yew::Properties;

use crate::content::landing::Section;

/// Props shared by every block that renders a [`Section`].
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub section: Section,
}

pub use feature::Feature;
pub use feature2::Feature2;
pub use hero::Hero;
pub use showcase::Showcase;
