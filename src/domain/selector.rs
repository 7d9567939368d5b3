//! ランダム選択

use rand::Rng;
use rand::seq::SliceRandom;

/// リストから一様ランダムに 1 件選びます。空なら `None`（選ぶものが無い）。
pub fn choose<'a, R: Rng + ?Sized>(choices: &'a [String], rng: &mut R) -> Option<&'a String> {
    choices.choose(rng)
}

/// スレッドローカル PRNG で選択します（暗号論的安全性・再現性は不要）
pub fn choose_random(choices: &[String]) -> Option<&String> {
    choose(choices, &mut rand::thread_rng())
}
