mod login_test;
mod router_test;
mod verify_phone_test;
