pub mod fonts;
pub mod panels;
pub mod plot;
pub mod table;
pub mod view3d;
