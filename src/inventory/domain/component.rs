use crate::shared::error::DashboardError;
use crate::shared::Result;

/// Component type used when the inventory does not say otherwise
pub const DEFAULT_COMPONENT_TYPE: &str = "library";

fn require_present(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DashboardError::Validation {
            message: format!("Component {} cannot be empty", field),
        }
        .into());
    }
    Ok(())
}

/// Component value object representing one inventoried software unit
///
/// Versions are free-form (Maven qualifiers such as `2.1.18.RELEASE` or
/// `0.0.1-SNAPSHOT` are common), so only presence is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    name: String,
    group: Option<String>,
    version: String,
    component_type: String,
    license: String,
    ecosystem: String,
}

impl Component {
    pub fn new(
        name: String,
        group: Option<String>,
        version: String,
        license: String,
        ecosystem: String,
    ) -> Result<Self> {
        require_present("name", &name)?;
        require_present("version", &version)?;
        require_present("license", &license)?;
        require_present("ecosystem", &ecosystem)?;

        // An empty group carries no namespace
        let group = group.filter(|g| !g.is_empty());

        Ok(Self {
            name,
            group,
            version,
            component_type: DEFAULT_COMPONENT_TYPE.to_string(),
            license,
            ecosystem,
        })
    }

    /// Overrides the component type (defaults to "library")
    pub fn with_type(mut self, component_type: String) -> Self {
        if !component_type.is_empty() {
            self.component_type = component_type;
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn ecosystem(&self) -> &str {
        &self.ecosystem
    }

    /// Display coordinate: `group:name` when a group is present, otherwise `name`
    pub fn coordinate(&self) -> String {
        match &self.group {
            Some(group) => format!("{}:{}", group, self.name),
            None => self.name.clone(),
        }
    }

    /// Identity key built from (group, name, version)
    pub fn key(&self) -> String {
        match &self.group {
            Some(group) => format!("{}-{}-{}", group, self.name, self.version),
            None => format!("{}-{}", self.name, self.version),
        }
    }
}
