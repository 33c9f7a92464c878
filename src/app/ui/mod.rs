mod overlay;
mod panels;
mod search;
mod text;

pub(in crate::app) use self::text::{TextAlign, TextLabel};
