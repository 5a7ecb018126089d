use strum::{AsRefStr, EnumString};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Agent,
}
