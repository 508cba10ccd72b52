//! REPL commands
//!
//! The command table and the handlers behind it. Handlers run against a
//! [`Session`], which owns the API client and the player's caught-Pokemon
//! collection. The command layer never touches the cache directly; it only
//! consumes the client's decoded results.

use std::collections::HashMap;

use rand::Rng;

use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::pokeapi::PokeApiClient;

// == Command ==
/// One REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Exit,
}

impl Command {
    /// All commands, in help-listing order.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
        Command::Exit,
    ];

    // == Parse ==
    /// Looks up a command by its input word.
    pub fn parse(word: &str) -> Option<Command> {
        match word {
            "help" => Some(Command::Help),
            "map" => Some(Command::Map),
            "mapb" => Some(Command::MapBack),
            "explore" => Some(Command::Explore),
            "catch" => Some(Command::Catch),
            "inspect" => Some(Command::Inspect),
            "pokedex" => Some(Command::Pokedex),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }

    // == Usage ==
    /// The command's invocation, argument placeholder included.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore <area name>",
            Command::Catch => "catch <pokemon name>",
            Command::Inspect => "inspect <pokemon name>",
            Command::Pokedex => "pokedex",
            Command::Exit => "exit",
        }
    }

    // == Description ==
    /// One-line description shown by `help`.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Map => "Displays the names of the next 20 location areas",
            Command::MapBack => "Displays the names of the previous 20 location areas",
            Command::Explore => "Explore a location area",
            Command::Catch => "Catch a pokemon and add it to your Pokedex",
            Command::Inspect => "Inspect a pokemon in your Pokedex",
            Command::Pokedex => "Prints the names of all pokemon in your Pokedex",
            Command::Exit => "Exit the Pokedex",
        }
    }
}

// == Outcome ==
/// Whether the REPL keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

// == Session ==
/// REPL state: pagination cursors and the caught-Pokemon collection.
#[derive(Debug)]
pub struct Session {
    /// API client, shared response cache inside
    client: PokeApiClient,
    /// URL of the next listing page, None past the last page
    next: Option<String>,
    /// URL of the previous listing page, None on the first page
    previous: Option<String>,
    /// Caught Pokemon by name
    pokedex: HashMap<String, Pokemon>,
}

impl Session {
    // == Constructor ==
    /// Creates a session positioned at the first listing page.
    pub fn new(client: PokeApiClient) -> Self {
        let next = Some(client.location_areas_url());
        Self {
            client,
            next,
            previous: None,
            pokedex: HashMap::new(),
        }
    }

    // == Execute ==
    /// Runs one command with its arguments.
    pub async fn execute(&mut self, command: Command, args: &[String]) -> Result<Outcome> {
        match command {
            Command::Help => self.command_help(),
            Command::Map => self.command_map().await?,
            Command::MapBack => self.command_map_back().await?,
            Command::Explore => self.command_explore(args).await?,
            Command::Catch => self.command_catch(args).await?,
            Command::Inspect => self.command_inspect(args)?,
            Command::Pokedex => self.command_pokedex(),
            Command::Exit => {
                println!("Closing the Pokedex... Goodbye!");
                return Ok(Outcome::Exit);
            }
        }

        Ok(Outcome::Continue)
    }

    // == Help ==
    fn command_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for command in Command::ALL {
            println!("{}: {}", command.usage(), command.description());
        }
    }

    // == Map ==
    /// Prints the next page of location areas and advances the cursors.
    async fn command_map(&mut self) -> Result<()> {
        let Some(url) = self.next.clone() else {
            println!("you're on the last page");
            return Ok(());
        };

        let page = self.client.location_areas(&url).await?;
        for area in &page.results {
            println!("{}", area.name);
        }

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    // == Map Back ==
    /// Prints the previous page of location areas and rewinds the cursors.
    async fn command_map_back(&mut self) -> Result<()> {
        let Some(url) = self.previous.clone() else {
            println!("you're on the first page");
            return Ok(());
        };

        let page = self.client.location_areas(&url).await?;
        for area in &page.results {
            println!("{}", area.name);
        }

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    // == Explore ==
    /// Lists the Pokemon encountered in a location area.
    async fn command_explore(&mut self, args: &[String]) -> Result<()> {
        let name = args
            .first()
            .ok_or(PokedexError::MissingArgument("location area to explore"))?;

        println!("Exploring {}...", name);
        let area = self.client.location_area(name).await?;

        println!("Found Pokemon:");
        for encounter in &area.pokemon_encounters {
            println!("- {}", encounter.pokemon.name);
        }

        Ok(())
    }

    // == Catch ==
    /// Rolls against the Pokemon's base experience; on success it joins
    /// the Pokedex.
    async fn command_catch(&mut self, args: &[String]) -> Result<()> {
        let name = args
            .first()
            .ok_or(PokedexError::MissingArgument("pokemon to catch"))?;

        let pokemon = self.client.pokemon(name).await?;
        println!("Throwing a Pokeball at {}...", pokemon.name);

        let roll: u32 = rand::thread_rng().gen_range(0..100_000);
        if roll > pokemon.base_experience {
            println!("{} was caught!", pokemon.name);
            println!("You may now inspect it with the inspect command.");
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            println!("{} escaped!", pokemon.name);
        }

        Ok(())
    }

    // == Inspect ==
    /// Prints the details of a caught Pokemon.
    fn command_inspect(&self, args: &[String]) -> Result<()> {
        let name = args
            .first()
            .ok_or(PokedexError::MissingArgument("pokemon to inspect"))?;

        let pokemon = self.pokedex.get(name).ok_or(PokedexError::NotCaught)?;

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for stat in &pokemon.stats {
            println!("- {}: {}", stat.stat.name, stat.base_stat);
        }
        println!("Types:");
        for entry in &pokemon.types {
            println!("- {}", entry.kind.name);
        }

        Ok(())
    }

    // == Pokedex ==
    /// Lists every caught Pokemon.
    fn command_pokedex(&self) {
        if self.pokedex.is_empty() {
            println!("Your Pokedex is empty. Catch some Pokemon first!");
            return;
        }

        println!("Your Pokedex:");
        for name in self.pokedex.keys() {
            println!("- {}", name);
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;
    use std::sync::Arc;
    use std::time::Duration;

    /// Client with an unreachable endpoint; tests seed its cache instead of
    /// letting it touch the network.
    fn offline_session() -> (Session, Arc<Cache>) {
        let cache = Arc::new(Cache::new(Duration::from_secs(300)));
        let client = PokeApiClient::new(Arc::clone(&cache), "http://127.0.0.1:1/api");
        (Session::new(client), cache)
    }

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("map"), Some(Command::Map));
        assert_eq!(Command::parse("mapb"), Some(Command::MapBack));
        assert_eq!(Command::parse("explore"), Some(Command::Explore));
        assert_eq!(Command::parse("catch"), Some(Command::Catch));
        assert_eq!(Command::parse("inspect"), Some(Command::Inspect));
        assert_eq!(Command::parse("pokedex"), Some(Command::Pokedex));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(Command::parse("flee"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[tokio::test]
    async fn test_exit_ends_the_loop() {
        let (mut session, _cache) = offline_session();

        let outcome = session.execute(Command::Exit, &[]).await.unwrap();
        assert_eq!(outcome, Outcome::Exit);
    }

    #[tokio::test]
    async fn test_help_continues() {
        let (mut session, _cache) = offline_session();

        let outcome = session.execute(Command::Help, &[]).await.unwrap();
        assert_eq!(outcome, Outcome::Continue);
    }

    #[tokio::test]
    async fn test_explore_requires_argument() {
        let (mut session, _cache) = offline_session();

        let result = session.execute(Command::Explore, &[]).await;
        assert!(matches!(
            result,
            Err(PokedexError::MissingArgument("location area to explore"))
        ));
    }

    #[tokio::test]
    async fn test_catch_requires_argument() {
        let (mut session, _cache) = offline_session();

        let result = session.execute(Command::Catch, &[]).await;
        assert!(matches!(result, Err(PokedexError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_inspect_uncaught_pokemon() {
        let (mut session, _cache) = offline_session();

        let result = session
            .execute(Command::Inspect, &["pikachu".to_string()])
            .await;
        assert!(matches!(result, Err(PokedexError::NotCaught)));
    }

    #[tokio::test]
    async fn test_map_past_last_page() {
        let (mut session, _cache) = offline_session();

        // Simulate having walked off the end of the listing.
        session.next = None;
        let outcome = session.execute(Command::Map, &[]).await.unwrap();
        assert_eq!(outcome, Outcome::Continue);
    }

    #[tokio::test]
    async fn test_mapb_on_first_page() {
        let (mut session, _cache) = offline_session();

        // A fresh session has no previous page; mapb must not fetch.
        let outcome = session.execute(Command::MapBack, &[]).await.unwrap();
        assert_eq!(outcome, Outcome::Continue);
    }

    #[tokio::test]
    async fn test_map_advances_cursors_from_cached_page() {
        let (mut session, cache) = offline_session();

        let first_url = session.next.clone().unwrap();
        let page = format!(
            r#"{{
                "count": 3,
                "next": "{first_url}?offset=20&limit=20",
                "previous": null,
                "results": [{{"name": "area-one", "url": "{first_url}/1/"}}]
            }}"#
        );
        cache.add(first_url.clone(), page.into_bytes()).await;

        let outcome = session.execute(Command::Map, &[]).await.unwrap();

        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(
            session.next.as_deref(),
            Some(format!("{first_url}?offset=20&limit=20").as_str())
        );
        assert_eq!(session.previous, None);
    }

    #[tokio::test]
    async fn test_caught_pokemon_shows_up_in_inspect() {
        let (mut session, _cache) = offline_session();

        let pikachu: Pokemon = serde_json::from_str(
            r#"{
                "name": "pikachu",
                "base_experience": 112,
                "height": 4,
                "weight": 60,
                "stats": [{"base_stat": 35, "stat": {"name": "hp", "url": "u"}}],
                "types": [{"type": {"name": "electric", "url": "u"}}]
            }"#,
        )
        .unwrap();
        session.pokedex.insert(pikachu.name.clone(), pikachu);

        let outcome = session
            .execute(Command::Inspect, &["pikachu".to_string()])
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Continue);
    }
}
