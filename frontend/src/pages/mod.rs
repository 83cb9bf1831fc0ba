pub mod compare;
pub mod examples;
pub mod guide;
pub mod landing;

pub use compare::Compare;
pub use examples::Examples;
pub use guide::Guide;
pub use landing::Landing;

/// Where every "try it" call to action points.
pub const TRY_URL: &str = "https://jimeng.jianying.com/ai-tool/seedance";
