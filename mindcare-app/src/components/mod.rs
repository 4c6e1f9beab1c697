pub(crate) mod confirm_dialog;
pub(crate) mod contact;
pub(crate) mod dashboard;
pub(crate) mod guard;
pub(crate) mod home;
pub(crate) mod login;
pub(crate) mod materials;
pub(crate) mod posts;
pub(crate) mod psychiatrists;
pub(crate) mod register;
pub(crate) mod sessions;
pub(crate) mod sidebar;
pub(crate) mod verify_email;
