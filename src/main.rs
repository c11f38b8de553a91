use std::env;
use std::error::Error;

use fridgemate::expiry::{expiring_within, parse_expiration};
use fridgemate::inventory::list_items;
use fridgemate::{
    classify_barcode, normalize, suggest_recipes, AppConfig, Classification, InventoryItem,
    InventoryStore, MemoryStore, NewItem, UserPreferences,
};
use log::debug;

const USAGE: &str = "Usage:
  fridgemate normalize <name>...
  fridgemate scan <barcode>
  fridgemate recipes [--prefs] [--vegan] [--gluten-free] [--dairy-free] [--cuisine <name>]... <item>...
  fridgemate expiring <name>=<MM/DD/YY>...";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (command, rest) = args.split_first().ok_or(USAGE)?;

    match command.as_str() {
        "normalize" => {
            for name in rest {
                println!("{}", normalize(name));
            }
        }
        "scan" => {
            let code = rest.first().ok_or(USAGE)?;
            let config = AppConfig::load()?;
            match classify_barcode(&config, code).await? {
                Classification::Accepted(product) => {
                    println!("{}", product.name);
                    if !product.details.is_empty() {
                        println!("{}", product.details);
                    }
                }
                Classification::Rejected(reason) => {
                    println!("Rejected: {}", reason);
                }
            }
        }
        "recipes" => {
            let (prefs, only_inventory, names) = parse_recipe_args(rest)?;
            let items = inventory_from_names(&names).await?;
            debug!("{} items in inventory", items.len());

            let config = AppConfig::load()?;
            let recipes = suggest_recipes(&config, &items, &prefs, only_inventory).await?;
            for recipe in recipes {
                println!("{:>8}  {}", recipe.id, recipe.title);
            }
        }
        "expiring" => {
            let config = AppConfig::load()?;
            let store = MemoryStore::new();
            for entry in rest {
                let (name, date) = entry.split_once('=').ok_or(USAGE)?;
                store
                    .create("cli", NewItem::manual(name, parse_expiration(date)?))
                    .await?;
            }

            let items = list_items(&store, "cli").await?;
            let today = chrono::Local::now().date_naive();
            for (date, item) in expiring_within(&items, today, config.reminder_window_days) {
                println!("{}  {}", date, item.name);
            }
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}

/// Flags select preferences; `--prefs` searches by preferences instead of inventory
fn parse_recipe_args(args: &[String]) -> Result<(UserPreferences, bool, Vec<String>), Box<dyn Error>> {
    let mut prefs = UserPreferences::default();
    let mut only_inventory = true;
    let mut names = Vec::new();

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--prefs" => only_inventory = false,
            "--vegan" => prefs.dietary.vegan = true,
            "--gluten-free" => prefs.dietary.gluten_free = true,
            "--dairy-free" => prefs.dietary.dairy_free = true,
            "--low-calorie" => prefs.dietary.low_calorie = true,
            "--cuisine" => {
                let cuisine = args.next().ok_or("--cuisine needs a value")?;
                let cuisines = &mut prefs.cuisine;
                let flag = match cuisine.to_lowercase().as_str() {
                    "mexican" => &mut cuisines.mexican,
                    "italian" => &mut cuisines.italian,
                    "indian" => &mut cuisines.indian,
                    "japanese" => &mut cuisines.japanese,
                    "chinese" => &mut cuisines.chinese,
                    "american" => &mut cuisines.american,
                    "german" => &mut cuisines.german,
                    other => return Err(format!("Unknown cuisine: {}", other).into()),
                };
                *flag = true;
            }
            name => names.push(name.to_string()),
        }
    }

    Ok((prefs, only_inventory, names))
}

/// Run the names through the same validation as the add-item flow
async fn inventory_from_names(names: &[String]) -> Result<Vec<InventoryItem>, Box<dyn Error>> {
    let store = MemoryStore::new();
    let today = chrono::Local::now().date_naive();
    for name in names {
        store.create("cli", NewItem::manual(name.as_str(), today)).await?;
    }
    Ok(store.list("cli").await?)
}
