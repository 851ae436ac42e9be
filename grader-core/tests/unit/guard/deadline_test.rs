use super::*;
use crate::guard::alarm::Alarm;
use crate::utils::Timer;

fn create_deadline(alarm: &Alarm, timeout: Duration) -> Deadline {
    Deadline::new(alarm.state().clone(), timeout, true)
}

#[test]
fn can_check_fired_deadline() {
    let alarm = Alarm::arm(Duration::ZERO);
    let deadline = create_deadline(&alarm, Duration::ZERO);

    assert!(deadline.is_reached());
    assert_eq!(deadline.check(), Err(TimeoutError::new("Code execution timed out")));
    assert_eq!(deadline.remaining(), Some(Duration::ZERO));
}

#[test]
fn can_interrupt_sleep_when_deadline_fires() {
    let alarm = Alarm::arm(Duration::from_millis(50));
    let deadline = create_deadline(&alarm, Duration::from_millis(50));
    let timer = Timer::start();

    let result = deadline.sleep(Duration::from_secs(10));

    assert!(result.is_err());
    assert!(timer.elapsed() < Duration::from_secs(5));
}

#[test]
fn can_sleep_full_duration_when_deadline_does_not_fire() {
    let alarm = Alarm::arm(Duration::from_secs(60));
    let deadline = create_deadline(&alarm, Duration::from_secs(60));
    let timer = Timer::start();

    let result = deadline.sleep(Duration::from_millis(30));

    assert!(result.is_ok());
    assert!(timer.elapsed() >= Duration::from_millis(30));
    assert!(deadline.remaining().is_some_and(|remaining| remaining <= Duration::from_secs(60)));
}

#[test]
fn can_return_no_remaining_time_when_not_enforced() {
    let alarm = Alarm::inert();
    let deadline = Deadline::new(alarm.state().clone(), Duration::from_secs(1), false);

    assert_eq!(deadline.remaining(), None);
    assert!(!deadline.is_enforced());
    assert!(deadline.check().is_ok());
}

#[test]
fn can_use_deadline_as_quota() {
    let alarm = Alarm::arm(Duration::ZERO);
    let quota: &dyn Quota = &create_deadline(&alarm, Duration::ZERO);

    assert!(quota.is_reached());
}

#[test]
fn can_check_deadline_registered_on_thread() {
    let alarm = Alarm::arm(Duration::ZERO);

    assert!(check_deadline().is_ok());

    register(alarm.state());
    assert!(check_deadline().is_err());

    unregister(alarm.state());
    assert!(check_deadline().is_ok());
}

#[test]
fn can_overwrite_registered_deadline() {
    let outer = Alarm::arm(Duration::from_secs(60));
    let inner = Alarm::arm(Duration::from_secs(60));

    register(outer.state());
    assert!(is_deadline_armed());

    register(inner.state());
    assert_eq!(outer.state().status(), AlarmStatus::Disarmed);
    assert!(is_deadline_armed());

    unregister(outer.state());
    assert!(is_deadline_armed());

    unregister(inner.state());
    assert!(!is_deadline_armed());
}
