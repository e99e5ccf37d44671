// ignition-chat/ignition-chat-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[macro_export]
macro_rules! user_email {
    ($email:expr) => {
        <$crate::dtos::UserEmail as std::str::FromStr>::from_str($email).unwrap()
    };
}
