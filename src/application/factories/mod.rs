mod formatter_factory;
mod presenter_factory;
mod resolver_factory;

pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
pub use resolver_factory::{ResolverFactory, ResolverType};
