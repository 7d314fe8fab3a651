use crate::token::Op;
use hashbrown::HashMap;

lazy_static! {
    /// Operator symbols, mapped to the operator they stand for
    pub static ref OPERATORS: HashMap<char, Op> = {
        let mut map = HashMap::<char, Op>::new();
        map.insert('+', Op::Gt);
        map.insert('-', Op::Lt);
        map.insert('=', Op::Eq);
        map.insert('&', Op::And);
        map.insert('|', Op::Or);
        map.insert('!', Op::Not);
        map.shrink_to_fit();
        map
    };
}
