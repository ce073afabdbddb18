use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use reqwest::{Client, Request};
use tracing::{debug, error, info, warn};

use crate::error::{MonitorError, Result};
use crate::extract::find_vacancy_marker;
use crate::report::{error_chain, LangStat};
use crate::Args;

/// Fixed search filters: Saint Petersburg, programmer role, title-only search.
const SEARCH_FILTERS: [(&str, &str); 3] = [
    ("area", "2"),
    ("professional_role", "96"),
    ("search_field", "name"),
];

pub struct VacancyMonitor {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
    progress: Arc<MultiProgress>,
}

impl VacancyMonitor {
    /// Create a new VacancyMonitor instance
    pub fn new(args: &Args) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64)")
            .build()?;

        let progress = if args.quiet {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };

        Ok(VacancyMonitor {
            client,
            endpoint: args.endpoint.clone(),
            timeout: args.timeout.map(Duration::from_secs),
            progress: Arc::new(progress),
        })
    }

    /// Override the per-language timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Look up every language concurrently.
    ///
    /// One task is spawned per entry, duplicates included. Tasks finish in any
    /// order; the returned stats are in the order of `langs`. A failure in one
    /// language only affects its own entry.
    pub async fn run(&self, langs: &[String]) -> Vec<LangStat> {
        info!("Searching vacancies for {} languages", langs.len());

        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

        let mut pending = FuturesUnordered::new();

        for (index, lang) in langs.iter().enumerate() {
            let pb = self.progress.add(ProgressBar::new_spinner());
            pb.set_style(spinner_style.clone());
            pb.set_message(format!("Waiting to search for '{}'", lang));
            pb.enable_steady_tick(Duration::from_millis(80));

            let client = self.client.clone();
            let request = self.search_request(lang);
            let timeout = self.timeout;
            let lang = lang.clone();

            let task = tokio::spawn(async move {
                pb.set_message(format!("Searching '{}'", lang));

                let vacancies = match request {
                    Ok(request) => {
                        VacancyMonitor::vacancy_count(&client, request, &lang, timeout).await
                    }
                    Err(e) => Err(MonitorError::from(e)),
                };

                match &vacancies {
                    Ok(count) => pb.finish_with_message(format!("✓ '{}': {}", lang, count)),
                    Err(e) => {
                        pb.finish_with_message(format!("✗ Failed '{}': {}", lang, error_chain(e)))
                    }
                }

                LangStat::new(lang, vacancies)
            });

            pending.push(async move { (index, task.await) });
        }

        let mut slots: Vec<Option<LangStat>> = langs.iter().map(|_| None).collect();

        while let Some((index, joined)) = pending.next().await {
            let stat = match joined {
                Ok(stat) => stat,
                Err(e) => {
                    error!("Search task for '{}' failed: {}", langs[index], e);
                    LangStat::new(langs[index].clone(), Err(MonitorError::Task(e.to_string())))
                }
            };
            slots[index] = Some(stat);
        }

        if let Err(e) = self.progress.clear() {
            debug!("Could not clear progress display: {}", e);
        }

        info!("All searches completed");
        slots.into_iter().flatten().collect()
    }

    /// Build the search request for one language.
    ///
    /// The language is percent-encoded as the last query parameter.
    pub fn search_request(&self, lang: &str) -> reqwest::Result<Request> {
        self.client
            .get(&self.endpoint)
            .query(&SEARCH_FILTERS[..])
            .query(&[("text", lang)])
            .build()
    }

    /// Fetch and parse the page for one language
    async fn vacancy_count(
        client: &Client,
        request: Request,
        lang: &str,
        timeout: Option<Duration>,
    ) -> Result<u32> {
        let fetch = VacancyMonitor::load_page(client, request);

        let page = match timeout {
            Some(limit) => match tokio::time::timeout(limit, fetch).await {
                Ok(page) => page?,
                Err(_) => {
                    warn!("Search for '{}' timed out after {:?}", lang, limit);
                    return Err(MonitorError::Timeout(limit));
                }
            },
            None => fetch.await?,
        };

        match find_vacancy_marker(&page) {
            Some(count) => {
                debug!("Found {} vacancies for '{}'", count, lang);
                Ok(count)
            }
            None => {
                warn!("No vacancy count on the page for '{}', reporting 0", lang);
                Ok(0)
            }
        }
    }

    /// Send a request and read the whole body. The status code is not checked.
    async fn load_page(client: &Client, request: Request) -> Result<Vec<u8>> {
        debug!("Requesting URL: {}", request.url());
        let response = client.execute(request).await?;

        if !response.status().is_success() {
            warn!("Search page returned {} for {}", response.status(), response.url());
        }

        let page = response.bytes().await?;
        Ok(page.to_vec())
    }
}
