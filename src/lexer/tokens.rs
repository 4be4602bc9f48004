use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Terminator,

    CommentLine,
    InlineComment,

    Message,

    StringLiteral,
    NumberLiteral,
    Word,

    IfStart,
    IfEnd,
    LoopStart,
    LoopEnd,

    ArithmeticPlus,
    ArithmeticMinus,
    ArithmeticMult,
    ArithmeticPow,
    ArithmeticMod,
    ArithmeticDiv,

    LessThan,
    LessThanEqualTo,
    GreaterThan,
    GreaterThanEqualTo,
    EqualTo,
    NotEqual,

    LogicalNot,
    LogicalAnd,
    LogicalOr,

    Header,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Comment,
    IfStatement,
    LoopStatement,
    ArithmeticOps,
    ComparitiveOps,
    LogicalOps,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Comment,
        Category::IfStatement,
        Category::LoopStatement,
        Category::ArithmeticOps,
        Category::ComparitiveOps,
        Category::LogicalOps,
    ];
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
    pub categories: Vec<Category>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: Vec<TokenKind>) -> bool {
        for kind in kinds {
            if kind == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Word,
            TokenKind::StringLiteral,
            TokenKind::NumberLiteral,
            TokenKind::Message,
            TokenKind::Header,
            TokenKind::CommentLine,
            TokenKind::InlineComment,
        ]) {
            println!("{} ({})", self.kind, self.lexeme);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
