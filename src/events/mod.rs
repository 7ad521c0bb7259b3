pub mod form;
pub mod nav;
pub mod reveal;

pub use form::wire_contact_form;
pub use nav::wire_menu;
pub use reveal::wire_reveal;
