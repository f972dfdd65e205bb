pub mod header;
pub mod search_bar;
pub mod tag_filter;
pub mod skin_toggle;
pub mod champion_gallery;
pub mod loading_indicator;
