pub mod a001_notification;
