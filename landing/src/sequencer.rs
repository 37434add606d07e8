//! Scripted terminal playback for the hero section.
//!
//! A cycle is a fixed list of [`ScheduledStep`]s produced by [`plan`]. The
//! view registers one timeout per step and feeds each one back through
//! [`Sequencer::apply`]. Every cycle gets a fresh [`Generation`]; steps
//! carrying an older generation are dropped, so a timeout that slipped past
//! cancellation can never touch the state of a newer cycle.

use std::time::Duration;

use crate::config::{PROMPT, Timing};
use crate::content::CommandSequence;

/// Cycle counter used to tag scheduled steps
pub type Generation = u64;

/// A single state transition of the terminal animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Show the first `n` characters of the command
    Type(usize),
    /// Push the full command line to the log and switch to "executing"
    Commit,
    /// Push the output line with this index
    Output(usize),
    /// Move on to the next sequence
    Advance,
}

/// A step and its offset from the start of the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub at: Duration,
    pub step: Step,
}

/// What the terminal currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub active_index: usize,
    pub typed_prefix: String,
    pub is_executing: bool,
    pub emitted_lines: Vec<String>,
}

/// Build the full schedule of one cycle for `sequence`.
///
/// Offsets are measured in characters, not bytes, so multi-byte glyphs such
/// as `→` take a single typing tick.
pub fn plan(sequence: &CommandSequence, timing: &Timing) -> Vec<ScheduledStep> {
    let chars = sequence.command.chars().count();
    let typed = timing.type_step * chars as u32;
    let outputs = sequence.outputs.len();

    let mut steps = Vec::with_capacity(chars + outputs + 3);
    steps.extend((0..=chars).map(|n| ScheduledStep {
        at: timing.type_step * n as u32,
        step: Step::Type(n),
    }));
    steps.push(ScheduledStep {
        at: typed + timing.commit_pause,
        step: Step::Commit,
    });
    steps.extend((0..outputs).map(|k| ScheduledStep {
        at: typed + timing.output_lead + timing.output_step * k as u32,
        step: Step::Output(k),
    }));
    steps.push(ScheduledStep {
        at: typed + timing.output_lead + timing.output_step * outputs as u32 + timing.final_pause,
        step: Step::Advance,
    });
    steps
}

/// Owner of the terminal playback state.
#[derive(Clone, Debug)]
pub struct Sequencer {
    sequences: &'static [CommandSequence],
    timing: Timing,
    generation: Generation,
    state: PlaybackState,
}

impl Sequencer {
    pub fn new(sequences: &'static [CommandSequence], timing: Timing) -> Self {
        Self {
            sequences,
            timing,
            generation: 0,
            state: PlaybackState::default(),
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    fn current(&self) -> Option<&'static CommandSequence> {
        self.sequences.get(self.state.active_index)
    }

    /// Reset the visible state and return the schedule for the active sequence.
    ///
    /// All steps handed out for earlier generations become stale.
    pub fn start_cycle(&mut self) -> (Generation, Vec<ScheduledStep>) {
        self.generation += 1;
        self.state.typed_prefix.clear();
        self.state.is_executing = false;
        self.state.emitted_lines.clear();

        let steps = self
            .current()
            .map(|sequence| plan(sequence, &self.timing))
            .unwrap_or_default();
        tracing::debug!(
            index = self.state.active_index,
            generation = self.generation,
            steps = steps.len(),
            "terminal cycle started"
        );
        (self.generation, steps)
    }

    /// Invalidate every outstanding step without starting a new cycle.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Apply `step` if it belongs to the current generation.
    ///
    /// Returns `false` when the step was stale and nothing changed.
    pub fn apply(&mut self, generation: Generation, step: Step) -> bool {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, ?step, "stale terminal step dropped");
            return false;
        }
        let Some(sequence) = self.current() else {
            return false;
        };

        match step {
            Step::Type(n) => {
                self.state.typed_prefix = sequence.command.chars().take(n).collect();
            }
            Step::Commit => {
                self.state.is_executing = true;
                self.state.typed_prefix.clear();
                self.state
                    .emitted_lines
                    .push(format!("{PROMPT} {}", sequence.command));
            }
            Step::Output(k) => {
                if let Some(line) = sequence.outputs.get(k) {
                    self.state.emitted_lines.push((*line).to_string());
                }
            }
            Step::Advance => {
                self.state.active_index = (self.state.active_index + 1) % self.sequences.len();
            }
        }
        true
    }
}

/// How an emitted terminal line is coloured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineTone {
    Prompt,
    Success,
    Plain,
}

const SUCCESS_MARKERS: [&str; 4] = ["успешно", "завершён", "завершена", "✅"];

impl LineTone {
    pub fn class(self) -> &'static str {
        match self {
            LineTone::Prompt => "terminal-output prompt",
            LineTone::Success => "terminal-output success",
            LineTone::Plain => "terminal-output",
        }
    }
}

/// Success markers win over the prompt prefix.
pub fn line_tone(line: &str) -> LineTone {
    if SUCCESS_MARKERS.iter().any(|marker| line.contains(marker)) {
        LineTone::Success
    } else if line.starts_with("user@dev") {
        LineTone::Prompt
    } else {
        LineTone::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TERMINAL_SEQUENCES;
    use pretty_assertions::assert_eq;

    fn sequencer() -> Sequencer {
        Sequencer::new(&TERMINAL_SEQUENCES, Timing::default())
    }

    /// Play one whole cycle in schedule order.
    fn run_cycle(seq: &mut Sequencer) -> Vec<String> {
        let (generation, steps) = seq.start_cycle();
        let mut lines_before_advance = Vec::new();
        for scheduled in steps {
            if scheduled.step == Step::Advance {
                lines_before_advance = seq.state().emitted_lines.clone();
            }
            assert!(seq.apply(generation, scheduled.step));
        }
        lines_before_advance
    }

    #[test]
    fn plan_matches_default_timings() {
        let sequence = &TERMINAL_SEQUENCES[1]; // "/status my-app", 14 chars
        let steps = plan(sequence, &Timing::default());

        assert_eq!(steps.len(), 15 + 1 + 4 + 1);
        assert_eq!(steps[0], ScheduledStep { at: Duration::ZERO, step: Step::Type(0) });
        assert_eq!(
            steps[14],
            ScheduledStep { at: Duration::from_millis(700), step: Step::Type(14) }
        );
        assert_eq!(
            steps[15],
            ScheduledStep { at: Duration::from_millis(1200), step: Step::Commit }
        );
        assert_eq!(
            steps[16],
            ScheduledStep { at: Duration::from_millis(1700), step: Step::Output(0) }
        );
        assert_eq!(
            steps[19],
            ScheduledStep { at: Duration::from_millis(4100), step: Step::Output(3) }
        );
        assert_eq!(
            steps[20],
            ScheduledStep { at: Duration::from_millis(6900), step: Step::Advance }
        );
    }

    #[test]
    fn plan_offsets_strictly_increase() {
        for sequence in &TERMINAL_SEQUENCES {
            let steps = plan(sequence, &Timing::default());
            for pair in steps.windows(2) {
                assert!(pair[0].at < pair[1].at, "{:?} !< {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn plan_counts_characters_not_bytes() {
        let sequence = &TERMINAL_SEQUENCES[0];
        let steps = plan(sequence, &Timing::default());
        let typed = steps.iter().filter(|s| matches!(s.step, Step::Type(_))).count();
        assert_eq!(typed, sequence.command.chars().count() + 1);
    }

    #[test]
    fn first_cycle_emits_deploy_script_then_advances() {
        let mut seq = sequencer();
        assert_eq!(seq.active_index(), 0);

        let lines = run_cycle(&mut seq);

        assert_eq!(
            lines,
            vec![
                "user@dev:~/project$ /deploy main → production",
                "🤖 TelegramDeploy получил команду...",
                "📦 Клонирование репозитория...",
                "🔨 Сборка образа Docker...",
                "✅ Деплой успешно завершён!",
            ]
        );
        assert_eq!(seq.active_index(), 1);
    }

    #[test]
    fn emitted_lines_are_command_then_outputs() {
        let mut seq = sequencer();
        for sequence in &TERMINAL_SEQUENCES {
            let lines = run_cycle(&mut seq);
            let mut expected = vec![format!("{PROMPT} {}", sequence.command)];
            expected.extend(sequence.outputs.iter().map(|line| line.to_string()));
            assert_eq!(lines, expected);
        }
    }

    #[test]
    fn active_index_wraps_after_n_cycles() {
        let mut seq = sequencer();
        for n in 1..=10 {
            run_cycle(&mut seq);
            assert_eq!(seq.active_index(), n % TERMINAL_SEQUENCES.len());
        }
    }

    #[test]
    fn typed_prefix_grows_one_char_per_tick() {
        let mut seq = sequencer();
        let (generation, steps) = seq.start_cycle();
        let full = TERMINAL_SEQUENCES[0].command;
        let mut previous = None;

        for scheduled in steps.iter().filter(|s| matches!(s.step, Step::Type(_))) {
            seq.apply(generation, scheduled.step);
            let len = seq.state().typed_prefix.chars().count();
            if let Some(prev) = previous {
                assert_eq!(len, prev + 1);
            }
            assert!(len <= full.chars().count());
            assert!(full.starts_with(&seq.state().typed_prefix));
            previous = Some(len);
        }
        assert_eq!(seq.state().typed_prefix, full);
    }

    #[test]
    fn commit_switches_to_executing_and_clears_prefix() {
        let mut seq = sequencer();
        let (generation, _) = seq.start_cycle();
        seq.apply(generation, Step::Type(5));
        assert!(!seq.state().is_executing);

        seq.apply(generation, Step::Commit);

        assert!(seq.state().is_executing);
        assert!(seq.state().typed_prefix.is_empty());
        assert_eq!(seq.state().emitted_lines.len(), 1);
    }

    #[test]
    fn restart_drops_steps_from_superseded_cycle() {
        let mut seq = sequencer();
        let (old, old_steps) = seq.start_cycle();

        // Cycle A gets as far as its second output line.
        let cut = old_steps
            .iter()
            .position(|s| s.step == Step::Output(2))
            .unwrap();
        for scheduled in &old_steps[..cut] {
            seq.apply(old, scheduled.step);
        }
        assert_eq!(seq.state().emitted_lines.len(), 3);

        let (new, _) = seq.start_cycle();
        assert_ne!(old, new);
        assert!(seq.state().emitted_lines.is_empty());

        for scheduled in &old_steps[cut..] {
            assert!(!seq.apply(old, scheduled.step));
        }
        assert!(seq.state().emitted_lines.is_empty());
        assert_eq!(seq.active_index(), 0);
    }

    #[test]
    fn cancel_stops_pending_steps() {
        let mut seq = sequencer();
        let (generation, _) = seq.start_cycle();
        seq.cancel();

        assert!(!seq.apply(generation, Step::Commit));
        assert!(!seq.apply(generation, Step::Advance));
        assert_eq!(seq.state(), &PlaybackState::default());
    }

    #[test]
    fn empty_script_plans_nothing() {
        let mut seq = Sequencer::new(&[], Timing::default());
        let (generation, steps) = seq.start_cycle();
        assert!(steps.is_empty());
        assert!(!seq.apply(generation, Step::Advance));
    }

    #[test]
    fn line_tones() {
        assert_eq!(line_tone("user@dev:~/project$ /status my-app"), LineTone::Prompt);
        assert_eq!(line_tone("✅ Всё работает стабильно!"), LineTone::Success);
        assert_eq!(line_tone("Сборка завершена"), LineTone::Success);
        assert_eq!(line_tone("[INFO] Connected to database"), LineTone::Plain);
        assert_eq!(LineTone::Success.class(), "terminal-output success");
    }
}
