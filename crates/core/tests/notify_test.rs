use std::sync::Arc;

use courtbook_core::notify::{
    AlertSink, Notification, NotificationKind, NotificationRenderer, Notifier,
};
use mockall::mock;

mock! {
    pub Renderer {}

    impl NotificationRenderer for Renderer {
        fn render(&self, notification: &Notification);
    }
}

mock! {
    pub Alert {}

    impl AlertSink for Alert {
        fn alert(&self, message: &str);
    }
}

#[test]
fn test_falls_back_to_alert_when_unmounted() {
    let mut alert = MockAlert::new();
    alert
        .expect_alert()
        .withf(|message| message.to_string() == "[ERROR] Booking failed")
        .times(1)
        .return_const(());

    let notifier = Notifier::new(Arc::new(alert));
    let notification = notifier.error("Booking failed");

    assert!(!notifier.is_mounted());
    assert_eq!(notification.kind, NotificationKind::Error);
}

#[test]
fn test_mounted_renderer_receives_notification() {
    let mut alert = MockAlert::new();
    alert.expect_alert().never();

    let mut renderer = MockRenderer::new();
    renderer
        .expect_render()
        .withf(|notification| {
            notification.kind == NotificationKind::Success
                && notification.message == "Booking confirmed"
        })
        .times(1)
        .return_const(());

    let notifier = Notifier::new(Arc::new(alert));
    notifier.mount(Arc::new(renderer));

    notifier.success("Booking confirmed");
}

#[test]
fn test_unmount_restores_fallback() {
    let mut alert = MockAlert::new();
    alert
        .expect_alert()
        .withf(|message| message.to_string() == "[INFO] Slots refreshed")
        .times(1)
        .return_const(());

    let mut renderer = MockRenderer::new();
    renderer.expect_render().times(1).return_const(());

    let notifier = Notifier::new(Arc::new(alert));
    notifier.mount(Arc::new(renderer));
    notifier.warning("Court closes early");
    notifier.unmount();
    notifier.info("Slots refreshed");
}

#[test]
fn test_each_notification_gets_its_own_id() {
    let mut alert = MockAlert::new();
    alert.expect_alert().times(2).return_const(());

    let notifier = Notifier::new(Arc::new(alert));
    let first = notifier.info("one");
    let second = notifier.info("one");

    assert_ne!(first.id, second.id);
}
