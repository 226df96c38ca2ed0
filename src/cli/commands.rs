use std::io::Write;

use crate::app::{AppContext, Result};
use crate::domain::content::{BREEDS, CHARACTERISTICS};

pub async fn print_fact(ctx: &AppContext) -> Result<()> {
    let fact = ctx.source.fetch_fact().await?;
    println!("{}", fact);
    Ok(())
}

pub async fn print_image(ctx: &AppContext) -> Result<()> {
    let url = ctx.source.fetch_image_url().await?;
    println!("{}", url);
    Ok(())
}

pub fn list(breeds: bool) -> Result<()> {
    let stdout = std::io::stdout();
    write_list(&mut stdout.lock(), breeds)
}

pub fn write_list(out: &mut impl Write, breeds: bool) -> Result<()> {
    if breeds {
        writeln!(out, "Captivating Cat Breeds")?;
        for breed in BREEDS {
            writeln!(out, "  {}: {}", breed.name, breed.description)?;
        }
    } else {
        writeln!(out, "Fascinating Cat Characteristics")?;
        for item in CHARACTERISTICS {
            writeln!(out, "  - {}", item)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio_test::{assert_err, assert_ok};

    use crate::app::PurrfectError;
    use crate::fetcher::CatSource;

    struct StubSource {
        fail: bool,
    }

    #[async_trait]
    impl CatSource for StubSource {
        async fn fetch_fact(&self) -> Result<String> {
            if self.fail {
                return Err(PurrfectError::EmptyResponse("facts".into()));
            }
            Ok("A group of cats is called a clowder.".into())
        }

        async fn fetch_image_url(&self) -> Result<String> {
            if self.fail {
                return Err(PurrfectError::EmptyResponse("images".into()));
            }
            Ok("https://cdn2.thecatapi.com/images/abc.jpg".into())
        }
    }

    #[test]
    fn test_write_characteristics() {
        let mut out = Vec::new();
        write_list(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Fascinating Cat Characteristics\n"));
        assert_eq!(text.lines().count(), 1 + CHARACTERISTICS.len());
    }

    #[test]
    fn test_write_breeds() {
        let mut out = Vec::new();
        write_list(&mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  Bengal: Wild-looking cats with mesmerizing leopard-like spots\n"));
    }

    #[tokio::test]
    async fn test_print_commands_propagate_results() {
        let ok = AppContext::with_source(Arc::new(StubSource { fail: false }));
        assert_ok!(print_fact(&ok).await);
        assert_ok!(print_image(&ok).await);

        let failing = AppContext::with_source(Arc::new(StubSource { fail: true }));
        assert_err!(print_fact(&failing).await);
        assert_err!(print_image(&failing).await);
    }
}
