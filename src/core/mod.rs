pub mod carousel;
pub mod engine;
pub mod fragment;
pub mod highlight;
pub mod link;
pub mod movie;
pub mod navigation;
pub mod renderer;
pub mod slide;

pub use crate::domain::model::{
    CarouselViewModel, HighlightViewModel, LinkSpec, MovieItem, NavPageView, NavbarViewModel,
    SlideItem,
};
pub use crate::domain::ports::{ConfigProvider, ContentNode, ContentStore, Storage};
pub use crate::utils::error::Result;
