use clap::{Parser, Subcommand};
use reqwest::Method;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "employee-cli")]
#[command(about = "Command-line client for the employee API façade", long_about = None)]
struct Cli {
    /// Façade base URL, including its base path
    #[arg(short, long, default_value = "http://localhost:8111/api/v1")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every employee
    List,
    /// Find employees whose name contains a fragment
    Search { fragment: String },
    /// Show one employee
    Get { id: String },
    /// Print the highest salary
    HighestSalary,
    /// Print the names of the ten best-paid employees
    TopTen,
    /// Create an employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: i64,
        #[arg(long)]
        age: i32,
        #[arg(long)]
        title: String,
    },
    /// Delete an employee by id and print the deleted name
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::List => client.request(Method::GET, format!("{base}/employees")),
        Commands::Search { fragment } => {
            let mut url = reqwest::Url::parse(&format!("{base}/employees/search"))?;
            url.path_segments_mut()
                .map_err(|_| "façade URL cannot be a base")?
                .push(&fragment);
            client.get(url)
        }
        Commands::Get { id } => client.get(employee_url(base, &id)?),
        Commands::HighestSalary => client.get(format!("{base}/employees/highestSalary")),
        Commands::TopTen => client.get(format!("{base}/employees/topTenHighestEarningEmployeeNames")),
        Commands::Create {
            name,
            salary,
            age,
            title,
        } => client.post(format!("{base}/employees")).json(&json!({
            "name": name,
            "salary": salary,
            "age": age,
            "title": title,
        })),
        Commands::Delete { id } => client.delete(employee_url(base, &id)?),
    };

    print_response(request.send().await?).await
}

fn employee_url(base: &str, id: &str) -> Result<reqwest::Url, Box<dyn std::error::Error>> {
    let mut url = reqwest::Url::parse(&format!("{base}/employees"))?;
    url.path_segments_mut()
        .map_err(|_| "façade URL cannot be a base")?
        .push(id);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: façade returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        // delete answers with plain text
        Err(_) => println!("{}", text),
    }
    Ok(())
}
