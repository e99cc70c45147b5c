//! The three primitive combinators.
//!
//! `I`, `K` and `S` are process-wide `static` values that can be applied to
//! anything a [`Val`] can hold. Host code that knows its types statically can
//! use [`idiot`], [`kestrel`] and [`starling`] instead.
use crate::values::Val;

/// Identity: `I a = a`.
pub static I: Val = Val::Idiot;

/// Kestrel: `K a b = a`.
pub static K: Val = Val::Kestrel;

/// Starling: `S a b c = a c (b c)`.
pub static S: Val = Val::Starling;

pub fn idiot<T>(a: T) -> T {
    a
}

pub fn kestrel<A: Clone, B>(a: A) -> impl Fn(B) -> A {
    move |_| a.clone()
}

/// `starling(a, b)(c) == a(c)(b(c))`.
pub fn starling<C, Y, R, G, FA, FB>(a: FA, b: FB) -> impl Fn(C) -> R
where
    C: Clone,
    FA: Fn(C) -> G,
    G: FnOnce(Y) -> R,
    FB: Fn(C) -> Y,
{
    move |c: C| a(c.clone())(b(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use crate::errors::SkiError;
    use crate::values::Term;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn kestrel_returns_first() {
        assert_eq!(app!(&K, "x", "y"), Ok(Val::from("x")));
    }

    #[test]
    fn kestrel_returns_first_for_random_values() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x: i32 = rng.gen();
            let y: i32 = rng.gen();
            eprintln!("K {:?} {:?}", x, y);
            assert_eq!(app!(&K, x, y), Ok(Val::I32(x)));
        }
    }

    #[test]
    fn idiot_returns_argument() {
        let x = Val::from("whatever");
        assert_eq!(I.apply(&x), Ok(x));
    }

    #[test]
    fn sskk_is_idiot() {
        let x = Val::from("whatever");
        assert_eq!(app!(&S, &S, &K, &K, &x), I.apply(&x));
    }

    #[test]
    fn sk_kk_is_idiot() {
        let x = Val::from("whatever");
        let sk = S.apply(&K).unwrap();
        let kk = K.apply(&K).unwrap();
        assert_eq!(app!(sk, kk, &x), I.apply(&x));
    }

    #[test]
    fn skk_on_random_values() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x = Val::I32(rng.gen());
            assert_eq!(app!(&S, &K, &K, &x), Ok(x));
        }
    }

    #[test]
    fn starling_distributes_argument() {
        let x = Val::func("x", |_, _| Ok(I.clone()));
        let y = Val::func("y", |interp, a| match interp.force(a)? {
            Val::I32(n) => Ok(Val::I32(n * 2)),
            other => Err(SkiError::invalid_application(&other, &Val::I32(2))),
        });
        let z = Val::constant("z", Val::I32(3));

        let xz = x.apply(&z).unwrap();
        let yz = y.apply(&z).unwrap();
        let actual = app!(&S, &x, &y, &z);

        assert_eq!(actual, xz.apply(yz));
        assert_eq!(actual, Ok(Val::I32(6)));
    }

    #[test]
    fn starling_surfaces_invalid_application() {
        // S a b c where a c is not callable.
        let a = Val::func("a", |_, _| Ok(Val::I32(1)));
        assert_eq!(
            app!(&S, &a, &I, "c"),
            Err(SkiError::InvalidApplication("1".to_string(), "I\"c\"".to_string()))
        );
    }

    #[test]
    fn partial_application_of_k_is_sk() {
        let sk = S.apply(&K).unwrap();
        assert_eq!(sk, Val::StarlingOf(Term::Static(&K)));
        assert_eq!(sk.to_string(), "SK");
    }

    #[test]
    fn typed_idiot_and_kestrel() {
        assert_eq!(idiot(3), 3);
        assert_eq!(idiot("x"), "x");
        assert_eq!(kestrel::<_, &str>("x")("y"), "x");
    }

    #[test]
    fn typed_starling() {
        let a = |_: fn() -> i32| idiot::<i32>;
        let b = |v: fn() -> i32| v() * 2;
        let c: fn() -> i32 = || 3;
        assert_eq!(starling(a, b)(c), 6);
    }

    #[test]
    fn typed_skx_is_idiot() {
        let k = |x: i32| move |_: i32| x;
        let anything = |x: i32| x.wrapping_mul(31);
        let skx = starling(k, anything);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x: i32 = rng.gen();
            assert_eq!(skx(x), idiot(x));
        }
    }
}
