//! Customer commands - one subcommand per store operation
//!
//! Records are written to stdout as pretty JSON; logs go to stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use custctl_store::{Customer, CustomerService};
use serde::Serialize;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum CustomerCommand {
    /// List customers with the given first name
    Query {
        /// Exact first name to match (case-sensitive)
        first_name: String,
    },
    /// Show one customer by id
    Read {
        /// Customer id
        id: i64,
    },
    /// Create a customer and print it with its assigned id
    Create {
        first_name: String,
        last_name: String,
    },
    /// Replace the names of an existing customer
    Update {
        /// Customer id
        id: i64,
        first_name: String,
        last_name: String,
    },
    /// Delete a customer by id
    Delete {
        /// Customer id
        id: i64,
    },
    /// Create many customers atomically from a JSON array
    ///
    /// Input is an array of {"first_name": .., "last_name": ..} objects:
    ///   custctl bulk-create customers.json
    ///   cat customers.json | custctl bulk-create -
    BulkCreate {
        /// JSON file to read, or '-' for stdin
        input: PathBuf,
    },
}

pub async fn run(service: &dyn CustomerService, command: CustomerCommand) -> Result<()> {
    match command {
        CustomerCommand::Query { first_name } => {
            let customers = service
                .query_by_first_name(&first_name)
                .await
                .with_context(|| format!("failed to query customers named '{}'", first_name))?;
            print_json(&customers)
        }
        CustomerCommand::Read { id } => {
            let customer = service
                .read(id)
                .await
                .with_context(|| format!("failed to read customer {}", id))?;
            print_json(&customer)
        }
        CustomerCommand::Create {
            first_name,
            last_name,
        } => {
            let customer = service
                .create(Customer::new(first_name, last_name))
                .await
                .context("failed to create customer")?;
            info!("created {}", customer);
            print_json(&customer)
        }
        CustomerCommand::Update {
            id,
            first_name,
            last_name,
        } => {
            let customer = Customer::new(first_name, last_name).with_id(id);
            service
                .update(&customer)
                .await
                .with_context(|| format!("failed to update customer {}", id))?;
            info!("updated {}", customer);
            print_json(&customer)
        }
        CustomerCommand::Delete { id } => {
            service
                .delete(id)
                .await
                .with_context(|| format!("failed to delete customer {}", id))?;
            info!(id, "deleted customer");
            Ok(())
        }
        CustomerCommand::BulkCreate { input } => {
            let customers = read_batch(&input)?;
            let count = customers.len();
            let created = service
                .bulk_create(customers)
                .await
                .with_context(|| format!("bulk create of {} customers rolled back", count))?;
            info!(count = created.len(), "bulk create committed");
            print_json(&created)
        }
    }
}

fn read_batch(input: &Path) -> Result<Vec<Customer>> {
    let content = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };

    serde_json::from_str(&content).context("expected a JSON array of customers")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
