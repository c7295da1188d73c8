use application::classroom_service::ClassroomService;
use application::report_service::ReportService;
use application::PracticeService;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use domain::question_bank::{BankFilter, ReviewStatus};
use domain::{Question, Report, SessionGateway, SessionId};
use infrastructure::config::Config;
use infrastructure::kora_client::KoraClient;
use infrastructure::reference_reader::read_reference;
use shared::confirmation::{ask_confirmation, ask_retry};
use shared::types::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "kora")]
#[command(about = "Kora: prática inteligente a partir de uma questão de referência")]
pub struct Cli {
    /// Backend base URL (overrides KORA_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Copy the exported Raio-X to the clipboard
    #[arg(long, global = true)]
    pub copy: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Paste a question, answer the generated ones and get your Raio-X
    Practice {
        /// Read the reference question from a .txt, .md, .pdf or .docx file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Start a session and print the generated questions
    Start {
        /// Read the reference question from a file instead of the arguments
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the session as JSON
        #[arg(long)]
        json: bool,

        /// Reference question text
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Submit answers for a session started earlier
    Submit {
        session_id: String,

        /// Answer as NUMBER=LETTER, e.g. `-a 1=A -a 2=C -a 3=B`
        #[arg(short, long = "answer", value_parser = parse_answer, required = true)]
        answers: Vec<(u32, String)>,

        /// Write the Raio-X JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show what the backend knows about a session
    Session { session_id: String },
    /// Check that the backend is reachable
    Health,
    /// Teacher dashboard
    Dashboard,
    /// Generated questions awaiting review
    Bank {
        /// pendente, adequada, precisa_revisao or incoerente
        #[arg(long)]
        status: Option<ReviewStatus>,

        #[arg(long)]
        discipline: Option<String>,
    },
    /// Mock exam overview
    Exams {
        /// Show the student's list of mock exams instead of the teacher board
        #[arg(long)]
        student: bool,
    },
    /// Student's Raio-X history
    History,
}

fn parse_answer(raw: &str) -> std::result::Result<(u32, String), String> {
    let (number, letter) = raw
        .split_once('=')
        .or_else(|| raw.split_once(':'))
        .ok_or_else(|| format!("expected NUMBER=LETTER, got `{raw}`"))?;
    let number = number
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("`{}` is not a question number", number.trim()))?;
    let letter = letter.trim();
    if letter.is_empty() {
        return Err(format!("question {number} has an empty answer"));
    }
    Ok((number, letter.to_string()))
}

pub struct CliApp {
    config: Config,
    copy_to_clipboard: bool,
    reports: ReportService,
}

impl CliApp {
    pub fn new(config: Config, copy_to_clipboard: bool) -> Self {
        Self {
            config,
            copy_to_clipboard,
            reports: ReportService::new(),
        }
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Practice { file } => self.handle_practice(file.as_deref()).await,
            Command::Start { file, json, text } => {
                self.handle_start(file.as_deref(), &text.join(" "), json)
                    .await
            }
            Command::Submit {
                session_id,
                answers,
                output,
            } => {
                self.handle_submit(SessionId::new(session_id), &answers, output.as_deref())
                    .await
            }
            Command::Session { session_id } => self.handle_session(SessionId::new(session_id)).await,
            Command::Health => self.handle_health().await,
            Command::Dashboard => {
                crate::render::dashboard(&ClassroomService::with_static_catalog().dashboard());
                Ok(())
            }
            Command::Bank { status, discipline } => {
                let view = ClassroomService::with_static_catalog()
                    .question_bank(&BankFilter { status, discipline });
                crate::render::question_bank(&view);
                Ok(())
            }
            Command::Exams { student } => {
                let classroom = ClassroomService::with_static_catalog();
                if student {
                    crate::render::student_exams(&classroom.student_exams());
                } else {
                    crate::render::mock_exams(&classroom.mock_exams());
                }
                Ok(())
            }
            Command::History => {
                crate::render::raio_x_history(
                    &ClassroomService::with_static_catalog().raio_x_history(),
                );
                Ok(())
            }
        }
    }

    fn client(&self) -> Result<KoraClient> {
        debug!(backend = %self.config.backend_url, "using backend");
        Ok(KoraClient::new(&self.config.backend_url)?)
    }

    async fn handle_practice(&self, file: Option<&Path>) -> Result<()> {
        let mut practice = PracticeService::new(self.client()?);
        let mut preset = match file {
            Some(path) => Some(read_reference(path).await?),
            None => None,
        };

        loop {
            if !self.collect_reference(&mut practice, preset.take()).await? {
                return Ok(());
            }
            self.answer_questions(&mut practice)?;
            let Some(report) = self.submit_with_retry(&mut practice).await? else {
                return Ok(());
            };

            crate::render::report(&report);
            if ask_confirmation("Baixar o Raio-X (JSON)?", false)? {
                self.export(&report, Path::new(&self.config.report_path))?;
            } else if self.copy_to_clipboard {
                self.copy(&report)?;
            }

            if !ask_confirmation("Nova prática?", false)? {
                return Ok(());
            }
            practice.reset();
        }
    }

    /// Loops until a session starts; `false` means the user gave up.
    async fn collect_reference<G: SessionGateway>(
        &self,
        practice: &mut PracticeService<G>,
        mut preset: Option<String>,
    ) -> Result<bool> {
        loop {
            let reference = match preset.take() {
                Some(text) => text,
                None => Input::<String>::with_theme(&ColorfulTheme::default())
                    .with_prompt("Cole a questão de referência")
                    .allow_empty(true)
                    .interact_text()?,
            };

            eprintln!("Gerando questões...");
            match practice.start(&reference).await {
                Ok(count) => {
                    println!("{}", format!("{count} questões geradas").green());
                    return Ok(true);
                }
                Err(err) => {
                    crate::render::practice_error(&err, "gerar questões");
                    if !err.is_validation() && !ask_retry()? {
                        return Ok(false);
                    }
                }
            }
        }
    }

    /// Prompts every question that has no answer yet, in order.
    fn answer_questions<G: SessionGateway>(&self, practice: &mut PracticeService<G>) -> Result<()> {
        let questions: Vec<Question> = practice.questions().to_vec();
        for number in practice.unanswered() {
            let Some(question) = questions.get(number as usize - 1) else {
                continue;
            };
            crate::render::question(number as usize, question);
            loop {
                let letter = prompt_alternative(number, question)?;
                match practice.answer(number, &letter) {
                    Ok(()) => break,
                    Err(err) => crate::render::practice_error(&err, "registrar a resposta"),
                }
            }
        }
        let answered = practice.answers().map_or(0, |a| a.len());
        println!("Total: {} questões | Respondidas: {answered}", questions.len());
        Ok(())
    }

    async fn submit_with_retry<G: SessionGateway>(
        &self,
        practice: &mut PracticeService<G>,
    ) -> Result<Option<Report>> {
        loop {
            eprintln!("Enviando respostas...");
            match practice.submit().await {
                Ok(report) => return Ok(Some(report)),
                Err(err) => {
                    crate::render::practice_error(&err, "enviar respostas");
                    if err.is_validation() {
                        self.answer_questions(practice)?;
                    } else if !ask_retry()? {
                        return Ok(None);
                    }
                }
            }
        }
    }

    async fn handle_start(&self, file: Option<&Path>, text: &str, json: bool) -> Result<()> {
        let reference = match file {
            Some(path) => read_reference(path).await?,
            None => text.to_string(),
        };
        let mut practice = PracticeService::new(self.client()?);
        practice.start(&reference).await?;

        let (Some(session_id), questions) = (practice.session_id(), practice.questions()) else {
            return Ok(());
        };
        if json {
            let payload = serde_json::json!({
                "session_id": session_id,
                "questoes_geradas": questions,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            crate::render::started(session_id, questions);
            println!(
                "\n{}",
                format!("kora submit {session_id} -a 1=<letra> ...").dimmed()
            );
        }
        Ok(())
    }

    async fn handle_submit(
        &self,
        session_id: SessionId,
        answers: &[(u32, String)],
        output: Option<&Path>,
    ) -> Result<()> {
        let mut practice = PracticeService::new(self.client()?);
        practice.resume(session_id).await?;
        for (number, letter) in answers {
            practice.answer(*number, letter)?;
        }
        let report = practice.submit().await?;

        crate::render::report(&report);
        if let Some(path) = output {
            self.export(&report, path)?;
        } else if self.copy_to_clipboard {
            self.copy(&report)?;
        }
        Ok(())
    }

    async fn handle_session(&self, session_id: SessionId) -> Result<()> {
        let snapshot = self.client()?.session(&session_id).await?;
        crate::render::snapshot(&snapshot);
        Ok(())
    }

    async fn handle_health(&self) -> Result<()> {
        let client = self.client()?;
        let health = client.health().await?;
        crate::render::health(client.base_url().as_str(), &health);
        Ok(())
    }

    fn export(&self, report: &Report, path: &Path) -> Result<()> {
        let written = self.reports.export(report, path)?;
        println!("{}", format!("Raio-X salvo em {}", written.display()).green());
        if self.copy_to_clipboard {
            self.copy(report)?;
        }
        Ok(())
    }

    fn copy(&self, report: &Report) -> Result<()> {
        let json = self.reports.to_json(report)?;
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(json)?;
        println!("{}", "Raio-X copiado para a área de transferência".green());
        Ok(())
    }
}

fn prompt_alternative(number: u32, question: &Question) -> Result<String> {
    if question.alternativas.is_empty() {
        let letter = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Resposta da questão {number}"))
            .interact_text()?;
        return Ok(letter);
    }
    let letters: Vec<&String> = question.alternativas.keys().collect();
    let labels: Vec<String> = question
        .alternativas
        .iter()
        .map(|(letter, text)| format!("{letter}) {text}"))
        .collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Sua resposta para a questão {number}"))
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(letters[choice].clone())
}
