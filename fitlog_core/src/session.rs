//! The interactive tracking session.
//!
//! One run walks a fixed sequence: profile, stats, imports, entry loop,
//! listing, optional charts. All state is owned here and dropped at exit.

use crate::charts::profile_charts;
use crate::collector::{collect_entry, Collected};
use crate::import::{import_csv, import_xml};
use crate::{CategorySet, Config, Console, Error, ProfileStats, ProfileStatus, ProfileStore, Result};
use std::path::{Path, PathBuf};

/// Session context: store, category sets, rendering settings and console
pub struct Session<C> {
    console: C,
    store: ProfileStore,
    categories: CategorySet,
    config: Config,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, config: Config) -> Self {
        Self {
            console,
            store: ProfileStore::new(),
            categories: config.category_set(),
            config,
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run the full sequence; CSV files are imported after the stats edit
    pub fn run(&mut self, csv_imports: &[PathBuf]) -> Result<()> {
        let username = self.create_profile()?;
        self.edit_profile(&username)?;

        for path in csv_imports {
            self.import_csv_file(&username, path)?;
        }
        self.offer_xml_import(&username)?;

        self.entry_loop(&username)?;
        self.list_entries(&username)?;

        if self
            .console
            .confirm("Do you want to visualize the data? (yes/no): ")?
        {
            self.visualize(&username)?;
        }

        self.console
            .say("\nProgram finished. Thank you for using the Fitness and Nutrition Tracker!")?;
        Ok(())
    }

    pub fn create_profile(&mut self) -> Result<String> {
        let username = self.console.ask("Enter your username: ")?;
        let (_, status) = self.store.get_or_create(&username);
        match status {
            ProfileStatus::Created => self.console.say(&format!("Profile for {} created!", username))?,
            ProfileStatus::Returning => self.console.say(&format!("Welcome back, {}!", username))?,
        }
        Ok(username)
    }

    pub fn edit_profile(&mut self, username: &str) -> Result<()> {
        self.console.say("\n--- Edit Your Profile Information ---")?;
        let weight = self.console.ask("Enter your weight (kg): ")?;
        let height = self.console.ask("Enter your height (cm): ")?;
        let goal = self
            .console
            .ask("Enter your fitness goal (e.g., Lose weight, Gain muscle): ")?;

        self.store.update_stats(
            username,
            ProfileStats {
                weight: Some(weight),
                height: Some(height),
                fitness_goal: Some(goal),
            },
        )?;
        self.console.say("Profile updated successfully!")
    }

    pub fn import_csv_file(&mut self, username: &str, path: &Path) -> Result<()> {
        let outcome = import_csv(path, &mut self.store, username);
        self.report_import(
            username,
            path,
            outcome,
            format!("Data imported successfully for {}", username),
        )
    }

    pub fn offer_xml_import(&mut self, username: &str) -> Result<()> {
        if !self
            .console
            .confirm("Do you want to import data from an XML file? (yes/no): ")?
        {
            return Ok(());
        }

        let filename = self.console.ask("Enter the XML filename: ")?;
        let path = PathBuf::from(filename);
        let outcome = import_xml(&path, &mut self.store, username);
        self.report_import(
            username,
            &path,
            outcome,
            format!("Data imported successfully for {} from XML.", username),
        )
    }

    /// Print the import result; import failures never end the session
    fn report_import(
        &mut self,
        username: &str,
        path: &Path,
        outcome: Result<usize>,
        success: String,
    ) -> Result<()> {
        match outcome {
            Ok(count) => {
                tracing::debug!("{} entries imported for '{}'", count, username);
                self.console.say(&success)
            }
            Err(err @ Error::FileNotFound(_)) => self.console.say(&err.to_string()),
            Err(Error::MalformedDocument { .. }) => self.console.say(&format!(
                "Error parsing the XML file {}. Please check the format.",
                path.display()
            )),
            Err(err) => {
                tracing::warn!("Import from {:?} aborted: {}", path, err);
                self.console
                    .say(&format!("Import from {} stopped: {}", path.display(), err))
            }
        }
    }

    /// Collect entries until the user declines to add another
    pub fn entry_loop(&mut self, username: &str) -> Result<()> {
        loop {
            match collect_entry(&mut self.console, &mut self.categories)? {
                Collected::Entry(entry) => {
                    let echo = entry.to_json()?;
                    self.store.append_entry(username, entry)?;
                    self.console
                        .say(&format!("Entry added for {}: {}", username, echo))?;
                }
                Collected::Invalid(reason) => {
                    self.console.say(&reason.to_string())?;
                    self.console.say("Entry not added due to invalid input.")?;
                }
            }

            if !self
                .console
                .confirm("Do you want to add another entry? (yes/no): ")?
            {
                return Ok(());
            }
        }
    }

    pub fn list_entries(&mut self, username: &str) -> Result<()> {
        let profile = self
            .store
            .profile(username)
            .ok_or_else(|| Error::UnknownProfile(username.to_string()))?;

        let mut lines = vec![format!("\nAll entries for {}:", username)];
        for entry in &profile.entries {
            lines.push(entry.to_json()?);
        }
        for line in lines {
            self.console.say(&line)?;
        }
        Ok(())
    }

    pub fn visualize(&mut self, username: &str) -> Result<()> {
        let profile = self
            .store
            .profile(username)
            .ok_or_else(|| Error::UnknownProfile(username.to_string()))?;

        let rendered: Vec<String> = profile_charts(username, profile)
            .iter()
            .map(|chart| chart.render(&self.config.chart))
            .collect();
        for chart in rendered {
            self.console.say(&chart)?;
        }
        Ok(())
    }
}
