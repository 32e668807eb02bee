//! Demonstrate the two lexical errors.

fn main() {
    // Unterminated string
    match imp_lex::tokenize("greet.imp", "func greet() {\n\treturn \"hello;\n}\n") {
        Ok(_) => println!("Lexed OK (unexpected)"),
        Err(e) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!(
                "  Location: line {}, column {}",
                e.location.line, e.location.column
            );
        }
    }

    println!();

    // Unknown character, reported while advancing
    let mut lexer = imp_lex::Lexer::from_source("mask.imp", "x = y & 1;").expect("lex failed");
    loop {
        match lexer.advance() {
            Ok(token) if token.is_end() => {
                println!("Lexed OK (unexpected)");
                break;
            }
            Ok(token) => println!("Token: {token}"),
            Err(e) => {
                println!("Lex error: {e}");
                println!("  Kind: {:?}", e.kind);
                break;
            }
        }
    }
}
