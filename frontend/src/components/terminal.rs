use std::collections::VecDeque;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const TYPE_DELAY_MS: u32 = 60;
pub const PAUSE_DELAY_MS: u32 = 1_400;
pub const HISTORY_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Typing,
    Pausing,
}

/// Cyclic "someone is typing shell commands" state. One `tick` reveals a character
/// or, after a pause, rotates to the next command.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalState {
    commands: Vec<String>,
    pub index: usize,
    pub revealed: usize,
    pub phase: Phase,
    pub history: VecDeque<String>,
}

impl TerminalState {
    pub fn new<S: AsRef<str>>(commands: &[S]) -> Self {
        Self {
            commands: commands.iter().map(|c| c.as_ref().to_string()).collect(),
            index: 0,
            revealed: 0,
            phase: Phase::Typing,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.commands.is_empty()
    }

    fn current_len(&self) -> usize {
        self.commands
            .get(self.index)
            .map(|c| c.chars().count())
            .unwrap_or(0)
    }

    pub fn tick(&mut self) {
        if self.commands.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => {
                let len = self.current_len();
                if self.revealed < len {
                    self.revealed += 1;
                }
                if self.revealed >= len {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => {
                let done = self.commands[self.index].clone();
                if self.history.len() == HISTORY_LIMIT {
                    self.history.pop_front();
                }
                self.history.push_back(done);
                self.index = (self.index + 1) % self.commands.len();
                self.revealed = 0;
                self.phase = Phase::Typing;
            }
        }
    }

    /// Delay before the next `tick` should fire.
    pub fn delay_ms(&self) -> u32 {
        match self.phase {
            Phase::Typing => TYPE_DELAY_MS,
            Phase::Pausing => PAUSE_DELAY_MS,
        }
    }

    /// Time to type every command once, pauses included. An empty command still
    /// takes one typing tick to reach its pause.
    pub fn cycle_ms(&self) -> u64 {
        self.commands
            .iter()
            .map(|c| c.chars().count().max(1) as u64 * TYPE_DELAY_MS as u64 + PAUSE_DELAY_MS as u64)
            .sum()
    }

    /// Replays the ticks a timer would have fired within `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if self.commands.is_empty() {
            return;
        }
        let mut budget = elapsed_ms;
        while budget >= self.delay_ms() as u64 {
            budget -= self.delay_ms() as u64;
            self.tick();
        }
    }

    pub fn visible_line(&self) -> String {
        self.commands
            .get(self.index)
            .map(|c| c.chars().take(self.revealed).collect())
            .unwrap_or_default()
    }
}

#[derive(Properties, PartialEq)]
pub struct TerminalProps {
    pub commands: &'static [&'static str],
    #[prop_or("~/projects".to_string())]
    pub cwd: String,
}

#[function_component(Terminal)]
pub fn terminal(props: &TerminalProps) -> Html {
    let state = use_state(|| TerminalState::new(props.commands));

    {
        let deps = (*state).clone();
        let state = state.clone();
        use_effect_with_deps(
            move |current: &TerminalState| {
                // One pending timeout at a time; dropping it on cleanup cancels it.
                let timeout = if current.is_idle() {
                    None
                } else {
                    let mut next = current.clone();
                    Some(Timeout::new(current.delay_ms(), move || {
                        next.tick();
                        state.set(next);
                    }))
                };
                move || drop(timeout)
            },
            deps,
        );
    }

    html! {
        <div class="terminal">
            <div class="terminal-bar">
                <span class="dot red"></span>
                <span class="dot yellow"></span>
                <span class="dot green"></span>
                <span class="terminal-title">{props.cwd.clone()}</span>
            </div>
            <div class="terminal-body">
                {
                    state.history.iter().map(|line| html! {
                        <div class="terminal-line done">
                            <span class="prompt">{"$ "}</span>{line.clone()}
                            <span class="ok">{" ✓"}</span>
                        </div>
                    }).collect::<Html>()
                }
                <div class="terminal-line active">
                    <span class="prompt">{"$ "}</span>{state.visible_line()}
                    <span class="cursor">{"▋"}</span>
                </div>
            </div>
            <style>
                {r#"
                .terminal {
                    background: #0d1117;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    font-family: "JetBrains Mono", ui-monospace, monospace;
                    font-size: 0.9rem;
                    color: #c9d1d9;
                    overflow: hidden;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.35);
                }
                .terminal-bar {
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    padding: 10px 14px;
                    background: #161b22;
                }
                .terminal-bar .dot { width: 12px; height: 12px; border-radius: 50%; }
                .dot.red { background: #ff5f56; }
                .dot.yellow { background: #ffbd2e; }
                .dot.green { background: #27c93f; }
                .terminal-title { margin-left: 12px; color: #8b949e; font-size: 0.8rem; }
                .terminal-body { padding: 16px; min-height: 180px; }
                .terminal-line { white-space: pre; line-height: 1.7; }
                .terminal-line.done { color: #8b949e; }
                .prompt { color: #7ee787; }
                .ok { color: #7ee787; }
                .cursor { animation: blink 1s step-end infinite; }
                @keyframes blink { 50% { opacity: 0; } }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_typing_first_command() {
        let state = TerminalState::new(&["ls", "pwd"]);
        assert_eq!(state.index, 0);
        assert_eq!(state.revealed, 0);
        assert_eq!(state.phase, Phase::Typing);
        assert!(state.history.is_empty());
        assert_eq!(state.visible_line(), "");
    }

    #[test]
    fn types_then_pauses_then_rotates() {
        let mut state = TerminalState::new(&["ls", "pwd"]);
        state.tick();
        assert_eq!(state.visible_line(), "l");
        assert_eq!(state.phase, Phase::Typing);
        state.tick();
        assert_eq!(state.visible_line(), "ls");
        assert_eq!(state.phase, Phase::Pausing);
        assert_eq!(state.delay_ms(), PAUSE_DELAY_MS);

        state.tick();
        assert_eq!(state.index, 1);
        assert_eq!(state.revealed, 0);
        assert_eq!(state.phase, Phase::Typing);
        assert_eq!(state.history, VecDeque::from(vec!["ls".to_string()]));
    }

    #[test]
    fn full_cycle_keeps_last_five_and_wraps() {
        let commands = ["a", "bb", "ccc", "dddd", "e", "ff", "ggg"];
        let mut state = TerminalState::new(&commands);
        let cycle = state.cycle_ms();
        state.advance(cycle);

        assert_eq!(state.index, 0);
        assert_eq!(state.revealed, 0);
        assert_eq!(state.phase, Phase::Typing);
        let expected: Vec<String> = commands[2..].iter().map(|c| c.to_string()).collect();
        assert_eq!(state.history.iter().cloned().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn full_cycle_with_few_commands_keeps_all() {
        let commands = ["git status", "cargo build"];
        let mut state = TerminalState::new(&commands);
        let cycle = state.cycle_ms();
        state.advance(cycle);

        assert_eq!(state.index, 0);
        assert_eq!(
            state.history.iter().cloned().collect::<Vec<_>>(),
            vec!["git status".to_string(), "cargo build".to_string()]
        );
    }

    #[test]
    fn shipped_script_cycles_cleanly() {
        let mut state = TerminalState::new(crate::content::TERMINAL_COMMANDS);
        let cycle = state.cycle_ms();
        state.advance(cycle);
        assert_eq!(state.index, 0);
        assert_eq!(state.history.len(), HISTORY_LIMIT.min(crate::content::TERMINAL_COMMANDS.len()));
        assert_eq!(
            state.history.back().map(String::as_str),
            crate::content::TERMINAL_COMMANDS.last().copied()
        );
    }

    #[test]
    fn empty_script_never_moves() {
        let mut state = TerminalState::new::<&str>(&[]);
        assert!(state.is_idle());
        state.tick();
        state.advance(10_000);
        assert_eq!(state.index, 0);
        assert!(state.history.is_empty());
    }

    #[test]
    fn empty_command_goes_straight_to_pause() {
        let mut state = TerminalState::new(&["", "x"]);
        state.tick();
        assert_eq!(state.phase, Phase::Pausing);
        state.tick();
        assert_eq!(state.index, 1);
    }

    #[test]
    fn full_cycle_counts_empty_commands() {
        let mut state = TerminalState::new(&["", "x"]);
        assert_eq!(state.cycle_ms(), 2 * (TYPE_DELAY_MS + PAUSE_DELAY_MS) as u64);
        let cycle = state.cycle_ms();
        state.advance(cycle);

        assert_eq!(state.index, 0);
        assert_eq!(state.phase, Phase::Typing);
        assert_eq!(
            state.history.iter().cloned().collect::<Vec<_>>(),
            vec![String::new(), "x".to_string()]
        );
    }

    #[test]
    fn reveal_respects_multibyte_chars() {
        let mut state = TerminalState::new(&["✓ok"]);
        state.tick();
        assert_eq!(state.visible_line(), "✓");
    }
}
