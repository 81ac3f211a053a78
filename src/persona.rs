//! Lumi persona: system prompt, canned replies and reply selection

use rand::Rng;

/// System prompt sent with every live call
pub const PERSONA_PROMPT: &str = "\
Você é a \"Lumi\", uma mentora escolar brasileira especializada em ajudar estudantes.

CARACTERÍSTICAS:
- Linguagem: Português brasileiro claro e acessível
- Tom: Empático, encorajador e prático
- Personalidade: Acolhedora, positiva e profissional
- Formato: Respostas curtas (100-200 palavras) com emojis relevantes

ÁREAS DE ATUAÇÃO:
1. TÉCNICAS DE ESTUDO: Pomodoro, mapas mentais, revisão espaçada
2. ORGANIZAÇÃO: Cronogramas, listas de tarefas, priorização
3. SAÚDE EMOCIONAL: Ansiedade, stress, motivação
4. ORIENTAÇÃO: Dúvidas sobre matérias específicas

REGRA IMPORTANTE: Seja prática e ofereça 1-2 ações concretas.";

/// Replies used when no credential is configured
pub const DEVELOPMENT_REPLIES: [&str; 5] = [
  "💡 Olá! Esta é uma resposta da DeepSeek! Como posso ajudar seus estudos hoje?"
, "🌬️ Entendo que pode estar se sentindo ansioso. Que tal uma pausa para respirar?"
, "📚 Para matemática, recomendo praticar com exercícios diários!"
, "🎯 Técnica Pomodoro: 25min foco total, 5min descanso!"
, "🤗 Lumi aqui! Dias desafiadores são oportunidades de crescimento!"
];

/// Reply used when the live call fails
pub const FALLBACK_REPLY: &str
  = "💡 Lumi está temporariamente offline. Usei minhas respostas locais para ajudar!";

/// Picks an index into a non-empty list
pub trait ReplySelector: Send + Sync
{   /// Must return a value in `0..len`
    fn select(&self, len: usize) -> usize;
}

/// Uniform selection from the thread-local rng
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl ReplySelector for RandomSelector
{   fn select(&self, len: usize) -> usize
    {   rand::rng().random_range(0..len)
    }
}

/// Pick a development reply with the given selector
pub fn development_reply(selector: &dyn ReplySelector) -> &'static str
{   let index = selector.select(DEVELOPMENT_REPLIES.len());
    // Out-of-range selectors wrap instead of panicking
    DEVELOPMENT_REPLIES[index % DEVELOPMENT_REPLIES.len()]
}
