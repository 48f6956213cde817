use crate::geom;

pub const FIG_PADDING: geom::Padding = geom::Padding::Even(20.0);

pub const BAR_FIG_SIZE: geom::Size = geom::Size::new(800.0, 400.0);
pub const RADAR_FIG_SIZE: geom::Size = geom::Size::new(400.0, 400.0);
pub const TIMESERIES_FIG_SIZE: geom::Size = geom::Size::new(800.0, 350.0);
pub const RELATION_FIG_SIZE: geom::Size = geom::Size::new(500.0, 500.0);

pub const BAR_WIDTH: f32 = 0.9;
pub const BAR_OPACITY: f32 = 0.5;

pub const SERIES_LINE_WIDTH: f32 = 1.5;
pub const MARKER_SIZE: f32 = 10.0;
pub const SCATTER_OPACITY: f32 = 0.5;

pub const SPOKE_LINE_WIDTH: f32 = 2.0;
pub const RADAR_LABEL_FONT_SIZE: f32 = 10.0;
pub const RADAR_POLY_OPACITY: f32 = 0.5;
pub const RADAR_VIEW_MARGIN: f32 = 0.3;

pub const ANNOT_FONT_SIZE: f32 = 12.0;
