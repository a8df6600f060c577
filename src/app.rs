use crate::backend::AnyBackend;
use crate::config::Config;
use crate::error::AppError;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::{handle_key, Event as TerminalEvent, Handler as TerminalEventHandler};
use crate::logger;
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::sync::{mpsc, Arc};
use std::time::Instant;
use tokio::sync::Mutex;

pub type NetworkEventSender = tokio::sync::mpsc::UnboundedSender<NetworkEvent>;
type NetworkEventReceiver = tokio::sync::mpsc::UnboundedReceiver<NetworkEvent>;
pub type ConfigSaveSender = mpsc::Sender<String>;
type ConfigSaveReceiver = mpsc::Receiver<String>;
type LogEntryReceiver = mpsc::Receiver<String>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let (log_tx, log_rx) = mpsc::channel::<String>();
        logger::install(log_tx, LevelFilter::Debug)?;

        info!("Starting application...");
        let (net_tx, net_rx) = tokio::sync::mpsc::unbounded_channel::<NetworkEvent>();
        let (config_save_tx, config_save_rx) = mpsc::channel::<String>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(net_tx, config_save_tx, &config))),
            config,
        };
        app.start_network(net_rx)?;
        app.start_config_saver(config_save_rx);
        app.start_ui(log_rx).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a thread to persist the selected theme.
    ///
    fn start_config_saver(&self, receiver: ConfigSaveReceiver) {
        let mut config = self.config.clone();
        std::thread::spawn(move || {
            while let Ok(theme_name) = receiver.recv() {
                config.theme_name = theme_name;
                if let Err(e) = config.save() {
                    error!("Failed to save config: {}", e);
                }
            }
        });
    }

    /// Start a separate thread for asynchronous submissions. Each event runs
    /// in its own task so a slow backend never delays another form.
    ///
    fn start_network(&self, mut net_receiver: NetworkEventReceiver) -> Result<(), AppError> {
        debug!("Creating new thread for asynchronous networking...");
        let backend = AnyBackend::from_spec(
            &self.config.backend,
            self.config.timings.simulated_delays(),
        )?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        let handler = NetworkEventHandler::new(Arc::clone(&self.state), Arc::new(backend));
        std::thread::spawn(move || {
            runtime.block_on(async {
                while let Some(network_event) = net_receiver.recv().await {
                    let handler = handler.clone();
                    tokio::spawn(async move { handler.handle(network_event).await });
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self, log_receiver: LogEntryReceiver) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        let result = self
            .run_loop(&mut terminal, &terminal_event_handler, &log_receiver)
            .await;

        self.state.lock().await.shutdown();
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        terminal_event_handler: &TerminalEventHandler,
        log_receiver: &LogEntryReceiver,
    ) -> Result<()> {
        loop {
            let event = terminal_event_handler.next()?;
            let mut state = self.state.lock().await;
            while let Ok(entry) = log_receiver.try_recv() {
                state.add_log_entry(entry);
            }
            match event {
                TerminalEvent::Input(key) => {
                    if !handle_key(key, &mut state, Instant::now()) {
                        debug!("Received application exit request.");
                        return Ok(());
                    }
                }
                TerminalEvent::Tick => {
                    state.tick(Instant::now());
                }
            }
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            }
            terminal
                .draw(|frame| crate::ui::render(frame, &state))
                .map_err(|e| AppError::Terminal(e.to_string()))?;
        }
    }
}
