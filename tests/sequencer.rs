mod tests {
    use core::cell::Cell;
    use std::collections::BTreeSet;

    use segment_stage::color::{self, Rgb};
    use segment_stage::layout;
    use segment_stage::sequencer::{self, Status};
    use segment_stage::{
        Clock, DualChase, Duration, Instant, MemoryStrips, Script, Sequencer, StripDriver, StripId,
    };

    /// Driver wrapper counting commits, to observe write batching.
    struct CountingStrips {
        inner: MemoryStrips,
        commits: usize,
    }

    impl CountingStrips {
        fn new() -> Self {
            Self {
                inner: MemoryStrips::new(),
                commits: 0,
            }
        }
    }

    impl StripDriver for CountingStrips {
        fn set_pixel(&mut self, strip: StripId, index: usize, color: Rgb) {
            self.inner.set_pixel(strip, index, color);
        }

        fn commit(&mut self) {
            self.commits += 1;
            self.inner.commit();
        }

        fn clear_all(&mut self) {
            self.inner.clear_all();
        }
    }

    struct StepClock {
        now_ms: Cell<u64>,
    }

    impl Clock for StepClock {
        fn now(&self) -> Instant {
            let now = self.now_ms.get();
            self.now_ms.set(now + 10);
            Instant::from_millis(now)
        }
    }

    #[test]
    fn test_warm_up_chases_during_holds() {
        let table = layout::table();
        let mut seq = sequencer::warm_up(table).unwrap();
        let mut strips = MemoryStrips::new();
        let left = table.resolve("LEFT_ANTENNA").unwrap();

        let mut chase_positions = BTreeSet::new();
        let mut eye_seen_lit = false;
        let mut done_at = None;

        for ms in (0..60_000_u64).step_by(10) {
            let status = seq.tick(Instant::from_millis(ms), &mut strips);

            // Watch the first two eye holds only, before the antennas get
            // flashed by their own script steps.
            if ms < 400 {
                for index in left.span() {
                    if strips.shown(StripId::Body)[index] != color::OFF {
                        chase_positions.insert(index);
                    }
                }
                if strips.shown(StripId::Body)[24] == color::BLUE {
                    eye_seen_lit = true;
                }
            }

            if status == Status::Done {
                done_at = Some(ms);
                break;
            }
        }

        let done_at = done_at.expect("warm-up should finish");
        assert!(done_at > 3_000, "sixteen holds take seconds, not {done_at}ms");
        // The chase moved through the antenna while a flash was being held.
        assert!(chase_positions.len() >= 2, "saw {chase_positions:?}");
        assert!(eye_seen_lit);
        // The chase never touches the ornament strip, and the closing
        // blackout wiped the flashed rings.
        assert!(strips.shown(StripId::Ornament).iter().all(|&p| p == color::OFF));
    }

    #[test]
    fn test_unknown_step_skips_without_consuming_a_hold() {
        let table = layout::table();
        let mut strips = MemoryStrips::new();
        let mut script: Script<4> = Script::new();
        script.push_flash("BOGUS").unwrap();
        script.push_flash("NOSE").unwrap();
        let mut seq = Sequencer::new(table, script, Duration::from_millis(50));

        // The bogus step is skipped and the nose lands on the same pass.
        assert_eq!(seq.tick(Instant::from_millis(0), &mut strips), Status::Running);
        assert_eq!(strips.shown(StripId::Body)[22], color::EMBER);

        assert_eq!(seq.tick(Instant::from_millis(60), &mut strips), Status::Done);
    }

    #[test]
    fn test_all_unknown_script_finishes_immediately() {
        let table = layout::table();
        let mut strips = MemoryStrips::new();
        let mut script: Script<4> = Script::new();
        script.push_flash("BOGUS").unwrap();
        let mut seq = Sequencer::new(table, script, Duration::from_millis(50));

        assert_eq!(seq.tick(Instant::from_millis(0), &mut strips), Status::Done);
        assert!(strips.shown(StripId::Body).iter().all(|&p| p == color::OFF));
    }

    #[test]
    fn test_hold_then_clear() {
        let table = layout::table();
        let mut strips = MemoryStrips::new();
        strips.set_pixel(StripId::Body, 0, color::RED);
        strips.commit();

        let mut script: Script<4> = Script::new();
        script.push_hold(Duration::from_millis(50)).unwrap();
        script.push_clear().unwrap();
        let mut seq = Sequencer::new(table, script, Duration::from_millis(10));

        assert_eq!(seq.tick(Instant::from_millis(0), &mut strips), Status::Running);
        assert_eq!(strips.shown(StripId::Body)[0], color::RED);

        assert_eq!(seq.tick(Instant::from_millis(20), &mut strips), Status::Running);

        assert_eq!(seq.tick(Instant::from_millis(60), &mut strips), Status::Done);
        assert_eq!(strips.shown(StripId::Body)[0], color::OFF);
    }

    #[test]
    fn test_one_commit_batches_chase_and_flash() {
        let table = layout::table();
        let mut strips = CountingStrips::new();
        let mut script: Script<4> = Script::new();
        script.push_flash("NOSE").unwrap();

        let (left, right) = layout::CHASE_PAIR;
        let chase = DualChase::new(&table, left, right).unwrap();
        let mut seq = Sequencer::new(table, script, Duration::from_millis(50))
            .with_chase(chase, Duration::from_millis(100));

        // First pass fires the chase ticker and starts the flash: both land
        // behind a single commit.
        seq.tick(Instant::from_millis(0), &mut strips);
        assert_eq!(strips.commits, 1);
        assert_eq!(strips.inner.shown(StripId::Body)[22], color::EMBER);
        assert_eq!(strips.inner.shown(StripId::Body)[45], color::PURPLE);
    }

    #[test]
    fn test_run_polls_to_completion() {
        let table = layout::table();
        let mut strips = MemoryStrips::new();
        let clock = StepClock {
            now_ms: Cell::new(0),
        };
        let mut script: Script<4> = Script::new();
        script.push_flash("RIGHT_EYE").unwrap();
        let mut seq = Sequencer::new(table, script, Duration::from_millis(50));

        seq.run(&clock, &mut strips);
        assert_eq!(strips.shown(StripId::Body)[23], color::BLUE);
    }
}
