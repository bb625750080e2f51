pub mod calculator;
pub mod measured_width;
pub mod surface_condition;
pub mod tire_type;

pub use calculator::CalculatorPage;
pub use measured_width::MeasuredWidthPage;
pub use surface_condition::SurfaceConditionPage;
pub use tire_type::TireTypePage;
