//! Property-based tests for cyclic states, cycle configuration and the
//! start/stop contract.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use stoplight::control::Command;
use stoplight::machine::ShutdownPolicy;
use stoplight::sink::MemorySink;
use stoplight::{BuildError, CycleConfig, CyclicState, LightState, StopOutcome, TimedStateMachine};

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> LightState {
        match variant {
            0 => LightState::Red,
            1 => LightState::Green,
            _ => LightState::Yellow,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Start,
    Stop,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Start), Just(Op::Stop)]
}

proptest! {
    #[test]
    fn full_period_returns_to_same_state(state in arbitrary_state()) {
        let mut current = state;
        for _ in 0..LightState::all().len() {
            current = current.next();
        }
        prop_assert_eq!(current, state);
    }

    #[test]
    fn walking_the_cycle_follows_fixed_order(steps in 0usize..50) {
        let order = ["RED", "GREEN", "YELLOW"];
        let mut current = LightState::initial();
        for step in 0..steps {
            prop_assert_eq!(current.name(), order[step % 3]);
            current = current.next();
        }
    }

    #[test]
    fn next_never_repeats_a_state(state in arbitrary_state()) {
        prop_assert_ne!(state.next(), state);
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: LightState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }

    #[test]
    fn period_is_sum_of_positive_units(
        red in 1u32..100,
        green in 1u32..100,
        yellow in 1u32..100,
        unit_ms in 1u64..1000,
    ) {
        let unit = Duration::from_millis(unit_ms);
        let cycle = CycleConfig::from_units(
            [(LightState::Red, red), (LightState::Green, green), (LightState::Yellow, yellow)],
            unit,
        )
        .unwrap();

        prop_assert_eq!(cycle.period(), unit * (red + green + yellow));
        prop_assert_eq!(cycle.longest(), unit * red.max(green).max(yellow));
    }

    #[test]
    fn any_zero_unit_count_is_rejected(
        units in prop::collection::vec(0u32..3, 3),
    ) {
        let result = CycleConfig::from_units(
            LightState::all().iter().copied().zip(units.iter().copied()),
            Duration::from_millis(1),
        );

        if units.contains(&0) {
            let is_zero_error = matches!(result, Err(BuildError::ZeroDuration { .. }));
            prop_assert!(is_zero_error);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn command_words_ignore_case(upper in prop::collection::vec(any::<bool>(), 5)) {
        let word: String = "start"
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(word.parse::<Command>(), Ok(Command::Start));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn no_output_survives_any_stop(ops in prop::collection::vec(arbitrary_op(), 1..8)) {
        let sink = Arc::new(MemorySink::new());
        let machine = TimedStateMachine::builder("Prop")
            .cycle(LightState::standard_cycle(Duration::from_millis(1)).unwrap())
            .sink(sink.clone())
            .shutdown(ShutdownPolicy::Interruptible)
            .build()
            .unwrap();

        let mut expect_running = false;
        for op in ops {
            match op {
                Op::Start => {
                    machine.start().unwrap();
                    expect_running = true;
                    thread::sleep(Duration::from_millis(3));
                }
                Op::Stop => {
                    let outcome = machine.stop();
                    let expected = if expect_running {
                        StopOutcome::Stopped
                    } else {
                        StopOutcome::NotRunning
                    };
                    prop_assert_eq!(outcome, expected);
                    prop_assert!(!machine.is_running());
                    expect_running = false;
                }
            }
            prop_assert_eq!(machine.is_running(), expect_running);
        }

        machine.stop();
        let seen = sink.len();
        thread::sleep(Duration::from_millis(10));
        prop_assert_eq!(sink.len(), seen);
    }
}
