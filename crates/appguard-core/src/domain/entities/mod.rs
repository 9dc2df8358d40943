pub mod application;

pub use application::{
    ApplicationBuilder, ApplicationDefinition, ApplicationSpec, Config, Endpoint, ImageRef,
    ObjectMeta, Role, RoleServiceBinding, Service,
};
