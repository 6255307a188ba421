//! Fiber Track Pro - dashboard state layer.
//!
//! Pure state holders consumed by presentation code:
//!
//! - **Pagination** (`pagination`): page, page size, derived window
//! - **Filtering** (`filter`): search query and status filter criteria
//! - **Tabs** (`tab`): project detail tabs synced from the `tab` URL parameter
//! - **Slicing** (`slice`): bounds-checked window copy of any sequence
//! - **Views** (`view`): list and detail page state built from the above
//! - **Context** (`context`): theme mode and signed-in session
//! - **Clock** (`clock`): cancellable periodic task behind the real-time clock

pub mod clock;
pub mod context;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod slice;
pub mod tab;
pub mod view;

pub use clock::{RealTimeClock, TaskHandle, every};
pub use context::{
    AppContext, Authenticator, Credentials, Session, ThemeMode, UserRole, UserSession,
};
pub use error::{Result, StateError};
pub use filter::{FilterState, Searchable, StatusFilter};
pub use pagination::{DEFAULT_ITEMS_PER_PAGE, Pagination};
pub use slice::paginate;
pub use tab::{ProjectTab, TabSync, reconcile};
pub use view::{ListPage, ProjectDetailView, ProjectListView};
