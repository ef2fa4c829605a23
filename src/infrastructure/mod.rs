pub mod core;
pub mod factory;
pub mod loading;
pub mod logging;
pub mod mock;
pub mod sigmoid_api;

pub use factory::ServiceFactory;
pub use loading::TracingLoadingIndicator;
pub use mock::MockSigmoidService;
pub use sigmoid_api::HttpSigmoidService;
