use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// DashboardFormatter port for rendering the dashboard
///
/// This port abstracts the rendering logic for different output formats
/// (JSON, Markdown, etc.).
pub trait DashboardFormatter {
    /// Renders the dashboard read model
    ///
    /// # Arguments
    /// * `model` - The dashboard read model containing metadata, the selected
    ///   tabs and the filtered component cards
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &DashboardReadModel) -> Result<String>;
}
