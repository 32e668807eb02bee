//! Pull tokens from a source one at a time and print them.

fn main() {
    let input = "\
func countdown(n: int) {
\twhile n {
\t\tn = n - 1;
\t}
\treturn \"done\";
}
";

    let mut lexer = imp_lex::Lexer::from_source("countdown.imp", input).expect("lex failed");

    while !lexer.token().is_end() {
        let token = lexer.token();
        println!("{:>3}:{:<3} {token}", token.location.line, token.location.column);
        lexer.advance().expect("lex failed");
    }
    println!("End of input at {}", lexer.token().location);
}
