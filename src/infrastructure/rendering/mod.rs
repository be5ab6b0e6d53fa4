pub mod pie_renderer;

pub use pie_renderer::PieChartRenderer;
