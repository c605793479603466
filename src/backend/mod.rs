mod lib_phone_number_backend;

pub use lib_phone_number_backend::LibPhoneNumberBackend;
