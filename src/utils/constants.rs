/// Horarios de visita ofrecidos en el modal de reserva
pub const VIEWING_TIMES: [&str; 12] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "13:00", "13:30", "14:00", "14:30", "15:00", "15:30",
];

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this property?";

// Selectores del HTML de la página
pub const PROPERTY_ITEM_SELECTOR: &str = ".property-item";
pub const EDIT_BUTTON_SELECTOR: &str = ".edit-btn";
pub const DELETE_BUTTON_SELECTOR: &str = ".delete-btn";
pub const FAVORITE_BUTTON_SELECTOR: &str = ".favorite-btn";
pub const CLOSE_MODAL_SELECTOR: &str = ".close-modal";

pub const EDIT_FORM_ID: &str = "editPropertyForm";
pub const BOOKING_MODAL_ID: &str = "bookingModal";
pub const MESSAGE_MODAL_ID: &str = "messageModal";
pub const BOOKING_TIME_SELECTOR: &str = "#bookingModal select[name=\"time\"]";

pub const LOGIN_FORM_ID: &str = "loginForm";
pub const FORGOT_PASSWORD_ID: &str = "forgotPassword";
