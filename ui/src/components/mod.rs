pub mod booking_editor;
pub mod booking_filters;
pub mod booking_table;
pub mod confirmation_modal;
pub mod extend_booking_modal;
pub mod layout;
pub mod modal;
pub mod pagination_controls;
pub mod require_auth;
pub mod status_badge;
pub mod toast_container;

pub use booking_editor::BookingEditor;
pub use booking_filters::BookingFilters;
pub use booking_table::{BookingColumn, BookingTable, RowAction};
pub use confirmation_modal::ConfirmationModal;
pub use extend_booking_modal::ExtendBookingModal;
pub use layout::Layout;
pub use modal::Modal;
pub use pagination_controls::PaginationControls;
pub use require_auth::RequireAuth;
pub use status_badge::StatusBadge;
pub use toast_container::ToastContainer;
