//! Reactive forms and server-rendered pages for Crypton
//!
//! This crate turns the schemas of `crypton-forms` into a running Persian
//! RTL front-end:
//!
//! - [`reactive`]: `Signal<T>`, an observable value with explicit subscribers
//! - [`binding`]: per-field value and error signals over a form controller
//! - [`submission`]: the notify, reset, navigate sequence after a valid submit
//! - [`notify`] and [`navigation`]: injectable `Notifier` and `Navigator` seams
//!   with in-memory implementations
//! - [`page`], [`components`], [`views`] and [`layout`]: the HTML page tree
//! - [`router`] and [`app`]: path resolution and session wiring
//!
//! Everything here is single-threaded; shared state uses `Rc<RefCell<_>>`.

pub mod app;
pub mod binding;
pub mod components;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod notify;
pub mod page;
pub mod reactive;
pub mod route;
pub mod router;
pub mod submission;
pub mod views;

pub use app::App;
pub use binding::{FieldBinding, FieldEvent, FieldSubscription, FormBinding, FormPhase};
pub use components::{FieldWidget, FormComponent, InputType};
pub use error::{PagesError, PagesResult};
pub use layout::Layout;
pub use navigation::{HistoryNavigator, Navigator};
pub use notify::{Notification, Notifier, ToastQueue};
pub use page::{IntoPage, Page, PageElement};
pub use reactive::{Signal, SubscriptionId};
pub use route::Route;
pub use router::Router;
pub use submission::{LOGIN_SUCCESS_TITLE, SIGNUP_SUCCESS_TITLE, SubmissionHandler};
